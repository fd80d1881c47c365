//! Sky Catch entry point
//!
//! Headless attract-mode run: a scripted host drives the session through the
//! same input and render boundaries a real frontend would use. The pointer
//! script tracks the item for a while (with a pause excursion), then walks
//! away and lets the run end.

use sky_catch::config::Config;
use sky_catch::driver::FrameDriver;
use sky_catch::render::LogRender;
use sky_catch::sim::{GamePhase, GameSession, InputStage, ItemPlacement, Side};

/// 60 Hz host frame
const FRAME: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Sky Catch attract mode starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = match GameSession::new(Config::default(), seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid config: {err}");
            return;
        }
    };
    log::info!("session created with seed {seed}");

    let mut driver = FrameDriver::new();
    let mut stage = InputStage::new();
    let mut presenter = LogRender::default();
    let mut now = 0.0;

    // First frame establishes the time base and starts the run
    stage.request_reset();
    driver.frame(now, &mut session, &mut stage, &mut presenter);

    // Stagger the opening drop
    session.place_item(ItemPlacement::Scattered);

    // Track the item with the pointer for 20 simulated seconds, pausing
    // briefly partway through
    for frame_no in 0..20 * 60 {
        now += FRAME;
        if frame_no == 600 || frame_no == 660 {
            stage.pause_toggle();
        }
        stage.set_pointer_target(Some(session.item.pos.x));
        driver.frame(now, &mut session, &mut stage, &mut presenter);
    }
    log::info!(
        "tracking done: score {}, health {}",
        session.score,
        session.health
    );

    // Park the paddle at the wall and let the run end
    stage.set_held(Side::Left, true);
    let mut frames = 0;
    while session.phase != GamePhase::GameOver && frames < 60 * 60 {
        now += FRAME;
        frames += 1;
        driver.frame(now, &mut session, &mut stage, &mut presenter);
    }

    log::info!(
        "attract run finished: phase {:?}, final score {}",
        session.phase,
        session.score
    );
}
