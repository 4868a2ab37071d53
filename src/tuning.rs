//! Data-driven game balance
//!
//! Every per-call constant of the simulation lives here with a named field so
//! tests and hosts can override it without touching the algorithms. Fixed
//! world facts (level lengths, tank size, timestep) stay in [`crate::consts`].

use serde::{Deserialize, Serialize};

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Dynamics ===
    /// Downward gravitational acceleration (units/s²; +y is down)
    pub gravity: f32,
    /// Thrust along the facing direction while a wheel is grounded (units/s²)
    pub drive_accel: f32,
    /// Angular impulse from holding either input (rad/s²), the flip mechanic
    pub flip_torque: f32,
    /// Maximum rate at which a grounded chassis aligns to the slope (rad/s)
    pub align_rate: f32,

    // === Friction and drag (per-tick multiplicative factors) ===
    /// Rolling friction on horizontal velocity while fueled
    pub ground_friction: f32,
    /// Rolling friction once the tank is empty (coasting decelerates harder)
    pub coast_friction: f32,
    /// Angular damping applied while grounded
    pub ground_angular_damping: f32,
    /// Air drag on horizontal velocity, applied every tick
    pub air_drag: f32,
    /// Angular damping applied every tick
    pub angular_damping: f32,

    // === Progress ===
    /// Fuel-can pickup radius (units)
    pub can_pickup_radius: f32,
    /// Coin pickup radius (units)
    pub coin_pickup_radius: f32,
    /// Head-to-ground crash tolerance (units)
    pub head_clearance: f32,
    /// Grace window after the tank empties before a forced game-over (s)
    pub fuel_grace_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 40.0,
            drive_accel: 300.0,
            flip_torque: 1.8,
            align_rate: 4.5,

            ground_friction: 0.999,
            coast_friction: 0.99,
            ground_angular_damping: 0.92,
            air_drag: 0.9998,
            angular_damping: 0.999,

            can_pickup_radius: 30.0,
            coin_pickup_radius: 28.0,
            head_clearance: 3.0,
            fuel_grace_secs: 5.0,
        }
    }
}
