//! Run progress: fuel, pickups, crash detection
//!
//! Runs after the dynamics step each tick. Fuel burn is odometric (absolute
//! horizontal displacement, both directions), pickups are proximity tests
//! against the vehicle's probe points, and the crash check compares the
//! rider's head against the ground line.

use glam::Vec2;

use crate::consts::CAN_HOVER;
use crate::meters_from_units;
use crate::sim::state::GameState;
use crate::sim::terrain;
use crate::tuning::Tuning;

/// Update fuel, pickups and the crash latch from the post-step vehicle pose.
pub fn update(state: &mut GameState, tuning: &Tuning) {
    let level_index = state.level.index;

    // Odometric fuel burn. Reversing burns fuel too.
    let dx = (state.vehicle.pos.x - state.last_fuel_x).abs();
    if dx > 0.0 {
        let consumed = meters_from_units(dx);
        state.fuel_meters = (state.fuel_meters - consumed).max(0.0);
        state.level_distance_meters += consumed;
        state.last_fuel_x = state.vehicle.pos.x;
    }

    let probes = state.vehicle.probe_points();

    for can in state.level.cans.iter_mut().filter(|c| !c.taken) {
        let can_pos = Vec2::new(can.x, terrain::sample(can.x, level_index).height - CAN_HOVER);
        if closest_approach(&probes, can_pos) < tuning.can_pickup_radius {
            can.taken = true;
            // A can refills the tank outright rather than adding a fixed amount
            state.fuel_meters = crate::consts::FUEL_TANK_METERS;
        }
    }

    for coin in state.level.coins.iter_mut().filter(|c| !c.taken) {
        if closest_approach(&probes, Vec2::new(coin.x, coin.y)) < tuning.coin_pickup_radius {
            coin.taken = true;
            state.coins_collected += 1;
        }
    }

    // Crash latches; the tick layer turns it into a screen transition.
    let head = state.vehicle.head_point();
    let ground = terrain::sample(head.x, level_index);
    if head.y >= ground.height - tuning.head_clearance {
        state.crashed = true;
    }
}

#[inline]
fn closest_approach(probes: &[Vec2; 3], target: Vec2) -> f32 {
    probes
        .iter()
        .map(|p| p.distance(target))
        .fold(f32::INFINITY, f32::min)
}
