//! Sky Catch - a catch-the-falling-item arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state, per-frame tick, collision)
//! - `driver`: Frame driver that sequences update and render
//! - `render`: Read-only snapshot boundary for presentation layers
//! - `config`: Validated game tuning

pub mod config;
pub mod driver;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigError};
pub use render::{Overlay, Render, Snapshot};

/// Game constants that are not tunable per session
pub mod consts {
    /// Maximum frame delta fed to the simulation (seconds). Host stalls
    /// (tab backgrounding, debugger) are capped to this.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle size when no sprite metrics are supplied
    pub const PADDLE_FALLBACK_SIZE: f32 = 72.0;
    /// Item size when no sprite metrics are supplied
    pub const ITEM_FALLBACK_SIZE: f32 = 48.0;

    /// Natural sprite dimensions are capped before scaling
    pub const PADDLE_SPRITE_CAP: f32 = 96.0;
    pub const ITEM_SPRITE_CAP: f32 = 64.0;

    /// Minimum distance between paddle center and arena bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 80.0;
    /// Fraction of paddle height used to anchor it above the bottom edge
    pub const PADDLE_ANCHOR_FRACTION: f32 = 0.65;

    /// Scattered placement spawns up to this far above the reset spawn line
    pub const SCATTER_RANGE: f32 = 200.0;
}
