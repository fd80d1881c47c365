//! Per-frame simulation update
//!
//! Advances a session by one frame: control events first, then paddle
//! movement, item physics, and catch/miss resolution. Nothing but control
//! events touches state unless the session is Running.

use super::collision::{catch_overlap, past_bottom};
use super::input::FrameInput;
use super::state::{GameEvent, GamePhase, GameSession, InputMode, ItemPlacement};

/// Advance the session by one frame. `dt` is elapsed seconds since the
/// previous frame, already clamped by the driver.
pub fn tick(session: &mut GameSession, input: &FrameInput, dt: f32) {
    session.events.clear();

    // Control events are honored in every phase; each is a no-op where the
    // transition is invalid.
    if input.reset {
        session.reset();
    }

    if input.pause {
        match session.phase {
            GamePhase::Running => {
                session.phase = GamePhase::Paused;
                log::info!("paused");
            }
            GamePhase::Paused => {
                session.phase = GamePhase::Running;
                log::info!("resumed");
            }
            _ => {}
        }
    }

    // Focus loss forces a pause, never a resume
    if input.focus_lost && session.phase == GamePhase::Running {
        session.phase = GamePhase::Paused;
        log::info!("paused (focus lost)");
    }

    if session.phase != GamePhase::Running {
        return;
    }

    let config = session.config().clone();

    // Mode arbitration: an explicit selection first, then engagement events
    // as the more recent signal. Engaging keys clears the stored pointer
    // target; a pointer report claims the paddle and stores its target.
    if let Some(mode) = input.mode_change {
        session.input_mode = mode;
        if mode != InputMode::Pointer {
            session.pointer_x = None;
        }
    }
    if input.engage_keys {
        session.input_mode = InputMode::Keys;
        session.pointer_x = None;
    }
    if let Some(x) = input.pointer_target {
        session.input_mode = InputMode::Pointer;
        session.pointer_x = Some(x);
    }

    // Paddle displacement: keys integrate a velocity, pointer assigns
    // the target directly
    match session.input_mode {
        InputMode::Keys => {
            let mut vx = 0.0;
            if input.left_held {
                vx -= config.move_speed;
            }
            if input.right_held {
                vx += config.move_speed;
            }
            session.paddle.pos.x += vx * dt;
        }
        InputMode::Pointer => {
            if let Some(x) = session.pointer_x {
                session.paddle.pos.x = x;
            }
        }
        InputMode::None => {}
    }
    session.paddle.pos.x = config.clamp_paddle_x(session.paddle.pos.x, session.paddle.size.x);

    // Fall speed is a pure function of the current score, so a milestone
    // crossed last frame accelerates the item already in flight
    session.item.vy = session.fall_speed();
    session.item.pos.y += session.item.vy * dt;

    // Catch and miss are mutually exclusive within a frame; the else keeps
    // the freshly placed item from being re-checked this tick
    if catch_overlap(
        session.paddle.pos,
        session.paddle.size,
        session.item.pos,
        session.item.size,
        config.catch_grace,
    ) {
        session.score += 1;
        session.place_item(ItemPlacement::Reset);
        session.events.push(GameEvent::Caught {
            score: session.score,
        });
    } else if past_bottom(session.item.pos.y, session.item.size.y, config.arena_h) {
        session.lose_health();
    }
}
