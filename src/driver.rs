//! Frame driver
//!
//! Owns the update-then-render ordering. The host supplies monotonic
//! timestamps from whatever scheduling primitive it has (vsync callback,
//! timer loop, test script); the driver derives the frame delta, clamps it,
//! drains staged input, advances the simulation, and only then hands a
//! snapshot to the presenter.

use crate::consts::MAX_FRAME_DT;
use crate::render::Render;
use crate::sim::{GameSession, InputStage, tick};

/// Sequences one session through update and render
#[derive(Debug)]
pub struct FrameDriver {
    last_time: Option<f64>,
    max_dt: f32,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            last_time: None,
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Override the frame-delta clamp
    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last_time: None,
            max_dt,
        }
    }

    /// Advance one frame. `now` is a monotonic timestamp in seconds; the
    /// first frame establishes the time base and runs with dt 0.
    pub fn frame<R: Render>(
        &mut self,
        now: f64,
        session: &mut GameSession,
        stage: &mut InputStage,
        presenter: &mut R,
    ) {
        let dt = self.delta(now);
        let input = stage.drain();
        tick(session, &input, dt);
        presenter.frame(&session.snapshot());
    }

    /// Elapsed seconds since the previous frame, clamped to bound
    /// simulation error after a host stall
    fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_time = Some(now);
        dt
    }
}
