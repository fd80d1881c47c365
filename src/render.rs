//! Render boundary
//!
//! Presentation layers consume a plain snapshot taken after the update step
//! completes and never mutate simulation state. The snapshot serializes so a
//! host shell can ship it across a process or WASM boundary as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// Position and size of a renderable entity (center plus full extents)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityView {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Full-screen overlay requested by the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Paused,
    GameOver,
}

/// Read-only view of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub health: u8,
    pub health_max: u8,
    pub paddle: EntityView,
    /// Drawn before the paddle, so the paddle renders on top
    pub item: EntityView,
}

impl Snapshot {
    /// Overlay to show, if any. GameOver takes precedence; a paused overlay
    /// can only apply while the run is alive.
    pub fn overlay(&self) -> Option<Overlay> {
        match self.phase {
            GamePhase::GameOver => Some(Overlay::GameOver),
            GamePhase::Paused => Some(Overlay::Paused),
            GamePhase::Ready | GamePhase::Running => None,
        }
    }
}

/// Presentation boundary: reads the snapshot, never the session
pub trait Render {
    fn frame(&mut self, snapshot: &Snapshot);
}

/// Reference presenter that logs phase and score changes. The demo binary
/// uses it; real frontends draw sprites and a HUD from the same snapshot.
#[derive(Debug, Default)]
pub struct LogRender {
    last_phase: Option<GamePhase>,
    last_score: u64,
}

impl Render for LogRender {
    fn frame(&mut self, snapshot: &Snapshot) {
        if self.last_phase != Some(snapshot.phase) {
            log::info!("phase -> {:?}", snapshot.phase);
            self.last_phase = Some(snapshot.phase);
        }
        if snapshot.score != self.last_score {
            log::info!(
                "score {} (health {}/{})",
                snapshot.score,
                snapshot.health,
                snapshot.health_max
            );
            self.last_score = snapshot.score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: GamePhase) -> Snapshot {
        Snapshot {
            phase,
            score: 3,
            health: 2,
            health_max: 3,
            paddle: EntityView {
                pos: Vec2::new(400.0, 520.0),
                size: Vec2::splat(72.0),
            },
            item: EntityView {
                pos: Vec2::new(200.0, 100.0),
                size: Vec2::splat(48.0),
            },
        }
    }

    #[test]
    fn test_overlay_selection() {
        assert_eq!(snapshot(GamePhase::Ready).overlay(), None);
        assert_eq!(snapshot(GamePhase::Running).overlay(), None);
        assert_eq!(snapshot(GamePhase::Paused).overlay(), Some(Overlay::Paused));
        assert_eq!(
            snapshot(GamePhase::GameOver).overlay(),
            Some(Overlay::GameOver)
        );
    }

    #[test]
    fn test_snapshot_round_trips_as_json() {
        let json = serde_json::to_string(&snapshot(GamePhase::Running)).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Running);
        assert_eq!(back.score, 3);
        assert_eq!(back.paddle.pos, Vec2::new(400.0, 520.0));
    }
}
