//! Hill Dash - a hill-climb driving game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, vehicle physics, progression)
//! - `session`: Host-facing wrapper with the fixed-timestep accumulator
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input decoding and window plumbing live in the host; this crate
//! only produces observable state and consumes already-decoded events.

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum ticks drained per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World scale: 8 length units per meter
    pub const UNITS_PER_METER: f32 = 8.0;

    /// Number of levels in a run
    pub const LEVEL_COUNT: u32 = 5;
    /// Target length of each level, in meters
    pub const LEVEL_METERS: [f32; 5] = [300.0, 500.0, 700.0, 900.0, 1100.0];

    /// Terrain baseline height. +y points down, so larger y is lower.
    pub const GROUND_BASE_Y: f32 = 576.0;

    /// Fuel rules
    pub const FUEL_TANK_METERS: f32 = 100.0;
    pub const FUEL_CAN_GAP_METERS: f32 = 80.0;
    pub const FIRST_CAN_METERS: f32 = 20.0;

    /// Coin rules
    pub const COINS_PER_LEVEL: usize = 20;
    /// Coins hover this far above the ground line (units)
    pub const COIN_HOVER: f32 = 50.0;
    /// Fuel cans rest this far above the ground line (units)
    pub const CAN_HOVER: f32 = 18.0;

    /// Vehicle start position (units)
    pub const START_X: f32 = 10.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert meters to world units
#[inline]
pub fn units_from_meters(m: f32) -> f32 {
    m * consts::UNITS_PER_METER
}

/// Convert world units to meters
#[inline]
pub fn meters_from_units(units: f32) -> f32 {
    units / consts::UNITS_PER_METER
}
