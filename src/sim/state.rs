//! Game state and the screen state machine
//!
//! All screen transitions driven by host events go through [`GameState::apply_event`];
//! per-tick transitions (finish, crash, fuel timeout) live in [`crate::sim::tick`].
//! Everything else here is plain observable state for the host to render.

use serde::{Deserialize, Serialize};

use crate::consts::{FUEL_TANK_METERS, LEVEL_COUNT, START_X};
use crate::sim::level::Level;
use crate::sim::terrain;
use crate::sim::vehicle::Vehicle;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    Playing,
    /// Level finished, next one unlocked
    LevelComplete,
    /// Crashed or ran dry
    GameOver,
    /// Final level finished
    RunComplete,
    /// Host should shut down
    Exit,
}

/// Host-originated events (already decoded from raw input by the host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// Start a fresh run from the menu
    StartRun,
    /// Replay the level that just ended
    RetryLevel,
    /// Jump to an unlocked level from an end screen
    SelectLevel(u32),
    /// Abandon whatever is happening and go back to the menu
    ReturnToMenu,
    Quit,
}

/// Full observable game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: Screen,
    /// Levels the player may select (1 = only the first)
    pub unlocked_levels: u32,

    pub vehicle: Vehicle,
    pub level: Level,

    /// Remaining fuel, in meters of travel
    pub fuel_meters: f32,
    /// Horizontal position at the last fuel deduction (units)
    pub last_fuel_x: f32,

    /// Coins collected in the current level
    pub coins_collected: u32,
    /// Distance traveled in the current level, in meters
    pub level_distance_meters: f32,

    /// Run totals, folded in when a level ends
    pub total_distance_meters: f32,
    pub total_coins: u32,

    /// Head hit the ground this level (latched until the level is rebuilt)
    pub crashed: bool,
    /// Countdown after the tank empties; `None` while fuel remains
    pub fuel_grace: Option<f32>,

    /// Ticks simulated since the level started
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let mut state = GameState {
            screen: Screen::Menu,
            unlocked_levels: 1,
            vehicle: Vehicle::default(),
            level: Level::build(0),
            fuel_meters: FUEL_TANK_METERS,
            last_fuel_x: 0.0,
            coins_collected: 0,
            level_distance_meters: 0.0,
            total_distance_meters: 0.0,
            total_coins: 0,
            crashed: false,
            fuel_grace: None,
            time_ticks: 0,
        };
        state.build_level(0);
        state
    }

    /// Rebuild per-level state for `index` and park the vehicle at the start.
    /// Run totals and unlocks are untouched.
    pub fn build_level(&mut self, index: u32) {
        let index = index.min(LEVEL_COUNT - 1);
        self.level = Level::build(index);
        self.fuel_meters = FUEL_TANK_METERS;
        self.coins_collected = 0;
        self.level_distance_meters = 0.0;
        self.crashed = false;
        self.fuel_grace = None;
        self.time_ticks = 0;

        let ground = terrain::sample(0.0, index);
        self.vehicle.reset(START_X, ground.height);
        self.last_fuel_x = self.vehicle.pos.x;

        log::info!(
            "level {} ready: {}m, {} cans, {} coins",
            index,
            self.level.length_meters,
            self.level.cans.len(),
            self.level.coins.len()
        );
    }

    /// Fresh run: unlocks and totals reset, level 0 rebuilt.
    pub fn reset_run(&mut self) {
        self.unlocked_levels = 1;
        self.total_distance_meters = 0.0;
        self.total_coins = 0;
        self.build_level(0);
    }

    /// Fold the current level's distance and coins into the run totals.
    pub(crate) fn fold_level_totals(&mut self) {
        self.total_distance_meters += self.level_distance_meters;
        self.total_coins += self.coins_collected;
    }

    /// Fuel gauge fill, 0..=1
    pub fn fuel_fraction(&self) -> f32 {
        (self.fuel_meters / FUEL_TANK_METERS).clamp(0.0, 1.0)
    }

    /// The single place host events turn into screen transitions. Events that
    /// are illegal on the current screen are ignored.
    pub fn apply_event(&mut self, event: RunEvent) {
        match (self.screen, event) {
            (_, RunEvent::ReturnToMenu) => {
                self.screen = Screen::Menu;
            }
            (Screen::Menu, RunEvent::StartRun) => {
                self.reset_run();
                self.screen = Screen::Playing;
            }
            (Screen::Menu, RunEvent::Quit) => {
                self.screen = Screen::Exit;
            }
            (
                Screen::LevelComplete | Screen::GameOver | Screen::RunComplete,
                RunEvent::RetryLevel,
            ) => {
                self.build_level(self.level.index);
                self.screen = Screen::Playing;
            }
            (
                Screen::LevelComplete | Screen::GameOver | Screen::RunComplete,
                RunEvent::SelectLevel(index),
            ) => {
                if index < self.unlocked_levels.min(LEVEL_COUNT) {
                    self.build_level(index);
                    self.screen = Screen::Playing;
                }
            }
            _ => {}
        }
    }
}
