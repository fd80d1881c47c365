//! Session state and core simulation types
//!
//! Everything a play session owns lives here: lifecycle phase, score, health,
//! the two entities, the stored input mode, and the seeded RNG that drives
//! item placement.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::consts::*;
use crate::render::{EntityView, Snapshot};

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session constructed, waiting for the first reset
    Ready,
    /// Active gameplay
    Running,
    /// Simulation suspended, state retained
    Paused,
    /// Health hit zero; waiting for reset
    GameOver,
}

/// Which control style owns the paddle. Modes are mutually exclusive:
/// engaging one clears the other's stored target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    None,
    /// Discrete left/right hold flags, integrated at move speed
    Keys,
    /// Absolute target x assigned directly each frame
    Pointer,
}

/// Things that happened during a tick, for presentation/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh run started
    Reset,
    /// The paddle caught the item
    Caught { score: u64 },
    /// The item fell past the arena bottom with health remaining
    Missed { health: u8 },
    /// The last miss ended the run
    GameOver { score: u64 },
}

/// The player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Center position. `x` is input-driven; `y` only changes on sprite fit.
    pub pos: Vec2,
    pub size: Vec2,
}

/// The falling item. Exactly one exists per session.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, recomputed from the score every tick
    pub vy: f32,
}

/// Vertical placement variant for the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPlacement {
    /// Spawn touching the arena's top edge
    Reset,
    /// Spawn a random distance further above the top edge
    Scattered,
}

/// Natural dimensions of a loaded sprite, before scaling
#[derive(Debug, Clone, Copy)]
pub struct SpriteMetrics {
    pub width: f32,
    pub height: f32,
}

/// Complete state of one play session
///
/// Created per run and passed explicitly into `tick`; there are no ambient
/// globals, so isolated sessions can run side by side (tests do).
#[derive(Debug, Clone)]
pub struct GameSession {
    config: Config,
    pub phase: GamePhase,
    pub score: u64,
    pub health: u8,
    pub paddle: Paddle,
    pub item: Item,
    pub input_mode: InputMode,
    /// Last mapped pointer target; survives drag release
    pub(crate) pointer_x: Option<f32>,
    rng: Pcg32,
    /// Events from the most recent tick (cleared at the top of each tick)
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the `Ready` phase with validated config
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            phase: GamePhase::Ready,
            score: 0,
            health: config.health_max,
            paddle: Paddle {
                pos: Vec2::ZERO,
                size: Vec2::splat(PADDLE_FALLBACK_SIZE),
            },
            item: Item {
                pos: Vec2::ZERO,
                size: Vec2::splat(ITEM_FALLBACK_SIZE),
                vy: config.fall_base,
            },
            input_mode: InputMode::None,
            pointer_x: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            config,
        };
        session.center_paddle();
        session.place_item(ItemPlacement::Reset);
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a fresh run. Valid from `Ready` or `GameOver`; silently ignored
    /// otherwise. Calling it twice in a row produces the same state.
    pub fn reset(&mut self) {
        if !matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
            return;
        }
        self.score = 0;
        self.health = self.config.health_max;
        self.input_mode = InputMode::None;
        self.pointer_x = None;
        self.place_item(ItemPlacement::Reset);
        self.center_paddle();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);
        log::info!("session reset (health {})", self.health);
    }

    /// Re-place the item above the arena and refresh its fall speed.
    /// `Reset` puts it exactly on the spawn line; `Scattered` staggers it
    /// a random distance further up.
    pub fn place_item(&mut self, placement: ItemPlacement) {
        let half_w = self.item.size.x / 2.0;
        self.item.pos.x = self.rng.random_range(half_w..=self.config.arena_w - half_w);
        self.item.pos.y = match placement {
            ItemPlacement::Reset => -self.item.size.y,
            ItemPlacement::Scattered => {
                -self.rng.random_range(0.0..SCATTER_RANGE) - self.item.size.y
            }
        };
        self.item.vy = self.fall_speed();
    }

    /// Item fall speed as a pure function of the current score:
    /// base plus one increment per ten points
    pub fn fall_speed(&self) -> f32 {
        self.config.fall_base + (self.score / 10) as f32 * self.config.fall_scale
    }

    /// Center the paddle horizontally and anchor it above the bottom edge
    pub fn center_paddle(&mut self) {
        self.paddle.pos.x = self.config.arena_w / 2.0;
        self.paddle.pos.y = self.config.arena_h
            - (self.paddle.size.y * PADDLE_ANCHOR_FRACTION).max(PADDLE_BOTTOM_MARGIN);
    }

    /// Refit entity sizes to loaded sprite dimensions and re-anchor the
    /// paddle. The asset collaborator calls this when sprites finish loading;
    /// fallback sizes stay in effect for anything passed as `None`.
    pub fn fit_sprites(&mut self, paddle: Option<SpriteMetrics>, item: Option<SpriteMetrics>) {
        if let Some(m) = paddle {
            let base = PADDLE_SPRITE_CAP.min(m.width).min(m.height);
            self.paddle.size = Vec2::splat(base * self.config.paddle_scale);
        }
        if let Some(m) = item {
            let base = ITEM_SPRITE_CAP.min(m.width).min(m.height);
            self.item.size = Vec2::splat(base * self.config.item_scale);
        }
        self.center_paddle();
    }

    /// A miss landed: drain one health, then either re-place the item or end
    /// the run
    pub(crate) fn lose_health(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("game over at score {}", self.score);
        } else {
            self.place_item(ItemPlacement::Reset);
            self.events.push(GameEvent::Missed {
                health: self.health,
            });
        }
    }

    /// Read-only view for the render boundary
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            health: self.health,
            health_max: self.config.health_max,
            paddle: EntityView {
                pos: self.paddle.pos,
                size: self.paddle.size,
            },
            item: EntityView {
                pos: self.item.pos,
                size: self.item.size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Config::default(), 7).unwrap()
    }

    #[test]
    fn test_new_session_is_ready() {
        let session = session();
        assert_eq!(session.phase, GamePhase::Ready);
        assert_eq!(session.score, 0);
        assert_eq!(session.health, session.config().health_max);
        // Item starts on the spawn line
        assert_eq!(session.item.pos.y, -session.item.size.y);
    }

    #[test]
    fn test_reset_only_from_ready_or_game_over() {
        let mut session = session();
        session.reset();
        assert_eq!(session.phase, GamePhase::Running);

        // Mid-run reset is ignored
        session.score = 12;
        session.reset();
        assert_eq!(session.score, 12);
        assert_eq!(session.phase, GamePhase::Running);

        session.phase = GamePhase::GameOver;
        session.reset();
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_reset_recenters_and_refills() {
        let mut session = session();
        session.phase = GamePhase::GameOver;
        session.score = 47;
        session.health = 0;
        session.paddle.pos.x = 111.0;

        session.reset();
        assert_eq!(session.score, 0);
        assert_eq!(session.health, session.config().health_max);
        assert_eq!(session.paddle.pos.x, session.config().arena_w / 2.0);
        assert_eq!(session.input_mode, InputMode::None);
        assert!(session.events.contains(&GameEvent::Reset));
    }

    #[test]
    fn test_placement_ranges() {
        let mut session = session();
        let half_w = session.item.size.x / 2.0;
        let arena_w = session.config().arena_w;

        for _ in 0..100 {
            session.place_item(ItemPlacement::Reset);
            assert!(session.item.pos.x >= half_w && session.item.pos.x <= arena_w - half_w);
            assert_eq!(session.item.pos.y, -session.item.size.y);

            session.place_item(ItemPlacement::Scattered);
            assert!(session.item.pos.y <= -session.item.size.y);
            assert!(session.item.pos.y > -(SCATTER_RANGE + session.item.size.y));
        }
    }

    #[test]
    fn test_fall_speed_milestones() {
        let mut session = session();
        let config = session.config().clone();

        session.score = 9;
        assert_eq!(session.fall_speed(), config.fall_base);
        session.score = 10;
        assert_eq!(session.fall_speed(), config.fall_base + config.fall_scale);
        session.score = 29;
        assert_eq!(session.fall_speed(), config.fall_base + 2.0 * config.fall_scale);
    }

    #[test]
    fn test_fit_sprites_caps_and_scales() {
        let mut session = session();
        session.fit_sprites(
            Some(SpriteMetrics {
                width: 256.0,
                height: 128.0,
            }),
            Some(SpriteMetrics {
                width: 32.0,
                height: 48.0,
            }),
        );
        // Paddle capped at 96 before scaling
        assert_eq!(session.paddle.size.x, 96.0 * session.config().paddle_scale);
        // Item limited by its smaller natural dimension
        assert_eq!(session.item.size.x, 32.0 * session.config().item_scale);
        // Paddle re-anchored against the bottom edge
        let expected_y = session.config().arena_h
            - (session.paddle.size.y * PADDLE_ANCHOR_FRACTION).max(PADDLE_BOTTOM_MARGIN);
        assert_eq!(session.paddle.pos.y, expected_y);
    }

    #[test]
    fn test_lose_health_replaces_item_until_empty() {
        let mut session = session();
        session.reset();
        session.item.pos.y = 10_000.0;

        session.lose_health();
        assert_eq!(session.health, 2);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.item.pos.y, -session.item.size.y);

        session.lose_health();
        session.lose_health();
        assert_eq!(session.health, 0);
        assert_eq!(session.phase, GamePhase::GameOver);
    }
}
