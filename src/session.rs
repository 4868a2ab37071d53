//! Host-facing session wrapper
//!
//! Owns the game state, tuning, held-input flags and the fixed-timestep
//! accumulator. The host calls [`Session::advance`] once per frame with wall
//! clock time; the simulation only ever steps in exact [`SIM_DT`] ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::state::{GameState, RunEvent, Screen};
use crate::sim::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Frame time clamp: anything longer (debugger pause, window drag) is
/// treated as a 100 ms hitch rather than simulated through.
const MAX_FRAME_SECS: f32 = 0.1;

pub struct Session {
    pub state: GameState,
    pub tuning: Tuning,
    accumulator: f32,
    input: TickInput,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Session {
            state: GameState::new(),
            tuning,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Held-input setters, called from the host's key press/release handlers
    pub fn set_accelerate(&mut self, held: bool) {
        self.input.accelerate = held;
    }

    pub fn set_decelerate(&mut self, held: bool) {
        self.input.decelerate = held;
    }

    /// Forward a decoded host event to the screen state machine
    pub fn handle(&mut self, event: RunEvent) {
        self.state.apply_event(event);
    }

    /// Consume `elapsed` wall-clock seconds and run the fixed ticks they
    /// cover. Returns the number of ticks actually simulated; leftover time
    /// stays in the accumulator for the next frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if self.state.screen != Screen::Playing {
            // Stale time must not burst-simulate when play resumes
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_SECS);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, &self.tuning, SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
            if self.state.screen != Screen::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> Session {
        let mut session = Session::new(Tuning::default());
        session.handle(RunEvent::StartRun);
        session
    }

    #[test]
    fn test_advance_drains_whole_ticks_only() {
        let mut session = playing_session();
        let steps = session.advance(2.5 * SIM_DT);
        assert_eq!(steps, 2);
        assert_eq!(session.state.time_ticks, 2);

        // The half tick left over completes on the next frame
        let steps = session.advance(0.6 * SIM_DT);
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_substep_cap() {
        let mut session = playing_session();
        // 100 ms is 12 ticks of debt; only MAX_SUBSTEPS may run
        let steps = session.advance(MAX_FRAME_SECS);
        assert_eq!(steps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut session = playing_session();
        assert_eq!(session.advance(-1.0), 0);
        assert_eq!(session.state.time_ticks, 0);
    }

    #[test]
    fn test_no_ticks_outside_playing() {
        let mut session = Session::new(Tuning::default());
        assert_eq!(session.advance(1.0), 0);
        assert_eq!(session.state.time_ticks, 0);
    }

    #[test]
    fn test_menu_time_does_not_burst() {
        let mut session = Session::new(Tuning::default());
        // Time spent on the menu is discarded
        session.advance(0.09);
        session.handle(RunEvent::StartRun);
        let steps = session.advance(0.5 * SIM_DT);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_input_flags_reach_the_vehicle() {
        let mut session = playing_session();
        session.set_accelerate(true);
        session.advance(SIM_DT);
        assert!(session.state.vehicle.accelerate_held);

        session.set_accelerate(false);
        session.set_decelerate(true);
        session.advance(SIM_DT);
        assert!(!session.state.vehicle.accelerate_held);
        assert!(session.state.vehicle.decelerate_held);
    }
}
