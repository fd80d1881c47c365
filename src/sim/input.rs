//! Input staging
//!
//! Device callbacks arrive whenever the host delivers them; they must never
//! touch the session directly. The stage collects them and the driver drains
//! exactly one `FrameInput` per tick, which keeps per-frame semantics
//! deterministic regardless of callback timing. Held flags keep their current
//! value across frames; pulses and pointer reports clear once consumed.

use super::state::InputMode;

/// Discrete movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Input consumed by a single tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Currently-held discrete flags
    pub left_held: bool,
    pub right_held: bool,
    /// A discrete control was engaged since the last frame
    pub engage_keys: bool,
    /// Latest pointer target mapped to arena x, if any was reported
    pub pointer_target: Option<f32>,
    /// Explicit mode selection, applied before engagement events
    pub mode_change: Option<InputMode>,
    /// Pause toggle requested
    pub pause: bool,
    /// Reset requested
    pub reset: bool,
    /// Host focus was lost
    pub focus_lost: bool,
}

/// Staging buffer between device callbacks and the simulation
#[derive(Debug, Default)]
pub struct InputStage {
    pending: FrameInput,
}

impl InputStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A discrete control (key or touch button) was pressed or released.
    /// Pressing engages keys mode on the next tick.
    pub fn set_held(&mut self, side: Side, held: bool) {
        match side {
            Side::Left => self.pending.left_held = held,
            Side::Right => self.pending.right_held = held,
        }
        if held {
            self.pending.engage_keys = true;
        }
    }

    /// A drag reported a new absolute target, already mapped from device to
    /// arena coordinates by the caller. Last value wins within a frame.
    /// `None` ends the drag: the session keeps its stored target and mode,
    /// so the paddle stays where the drag left it.
    pub fn set_pointer_target(&mut self, x: Option<f32>) {
        if let Some(x) = x {
            self.pending.pointer_target = Some(x);
        }
    }

    /// Select a control mode explicitly. Engagement events arriving in the
    /// same frame still win, being the more recent signal.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.pending.mode_change = Some(mode);
    }

    pub fn pause_toggle(&mut self) {
        self.pending.pause = true;
    }

    pub fn request_reset(&mut self) {
        self.pending.reset = true;
    }

    pub fn focus_lost(&mut self) {
        self.pending.focus_lost = true;
    }

    /// Take the input for this frame. Held flags persist; everything else
    /// is a one-shot and clears.
    pub fn drain(&mut self) -> FrameInput {
        let input = self.pending.clone();
        self.pending.engage_keys = false;
        self.pending.pointer_target = None;
        self.pending.mode_change = None;
        self.pending.pause = false;
        self.pending.reset = false;
        self.pending.focus_lost = false;
        input
    }
}
