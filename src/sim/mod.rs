//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - All mutation inside the per-frame tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{catch_overlap, past_bottom};
pub use input::{FrameInput, InputStage, Side};
pub use state::{
    GameEvent, GamePhase, GameSession, InputMode, Item, ItemPlacement, Paddle, SpriteMetrics,
};
pub use tick::tick;
