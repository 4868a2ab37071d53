//! Headless demo driver
//!
//! Runs the simulation with the throttle held until the level ends, printing
//! a summary. Mostly useful for sanity-checking tuning changes:
//!
//! ```text
//! hill-dash [tuning.json]
//! ```

use hill_dash::consts::SIM_DT;
use hill_dash::sim::{RunEvent, Screen};
use hill_dash::{Session, Tuning};

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(tuning) => {
                log::info!("tuning loaded from {path}");
                tuning
            }
            Err(err) => {
                log::warn!("bad tuning file {path}: {err}, using defaults");
                Tuning::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {path}: {err}, using defaults");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut session = Session::new(load_tuning());
    session.handle(RunEvent::StartRun);
    session.set_accelerate(true);

    // Drive at 60 fps of wall time until the level resolves
    let frame = 1.0 / 60.0;
    let max_frames = (120.0 / frame) as u32;
    for _ in 0..max_frames {
        session.advance(frame);
        if session.state.screen != Screen::Playing {
            break;
        }
    }

    let state = &session.state;
    println!(
        "screen: {:?} after {:.1}s simulated",
        state.screen,
        state.time_ticks as f32 * SIM_DT
    );
    println!(
        "distance: {:.1}m of {:.0}m, coins: {}, fuel left: {:.1}m",
        state.level_distance_meters,
        state.level.length_meters,
        state.coins_collected,
        state.fuel_meters
    );
}
