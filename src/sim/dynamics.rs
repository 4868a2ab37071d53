//! Vehicle dynamics
//!
//! One fixed-timestep integration step: gravity, input forces, per-wheel
//! ground contact resolution, then friction and drag. Contact is resolved
//! per wheel against the terrain function with the front wheel settled first,
//! so the rear wheel sees the already-corrected chassis pose.

use glam::Vec2;

use crate::sim::terrain;
use crate::sim::vehicle::Vehicle;
use crate::tuning::Tuning;
use crate::wrap_angle;

/// Which wheels ended the step touching the ground
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact {
    pub front: bool,
    pub rear: bool,
}

impl GroundContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.front || self.rear
    }
}

/// Advance the vehicle by one tick of `dt` seconds.
///
/// `has_fuel` gates input forces: an empty tank still coasts and crashes, it
/// just stops responding to thrust and torque.
pub fn step(
    vehicle: &mut Vehicle,
    has_fuel: bool,
    level_index: u32,
    tuning: &Tuning,
    dt: f32,
) -> GroundContact {
    vehicle.vel.y += tuning.gravity * dt;

    // Grounded test uses the pose the vehicle is about to move into, so
    // thrust engages on the same tick a wheel reaches the ground.
    let tentative_pos = vehicle.pos + vehicle.vel * dt;
    let tentative_angle = vehicle.angle + vehicle.angular_vel * dt;
    let tentative_grounded = wheel_touches(vehicle, tentative_pos, tentative_angle, level_index);

    if has_fuel {
        let (s, c) = tentative_angle.sin_cos();
        let facing = Vec2::new(c, s);
        if vehicle.accelerate_held {
            if tentative_grounded {
                vehicle.vel += facing * tuning.drive_accel * dt;
            }
            vehicle.angular_vel -= tuning.flip_torque * dt;
        }
        if vehicle.decelerate_held {
            if tentative_grounded {
                vehicle.vel -= facing * tuning.drive_accel * dt;
            }
            vehicle.angular_vel += tuning.flip_torque * dt;
        }
    }

    vehicle.pos += vehicle.vel * dt;
    vehicle.angle += vehicle.angular_vel * dt;

    // Front first: the rear correction runs against the front-settled pose.
    let front_local = vehicle.front_wheel_local();
    let rear_local = vehicle.rear_wheel_local();
    let contact = GroundContact {
        front: settle_wheel(vehicle, front_local, level_index, tuning, dt),
        rear: settle_wheel(vehicle, rear_local, level_index, tuning, dt),
    };

    if contact.any() {
        let friction = if has_fuel {
            tuning.ground_friction
        } else {
            tuning.coast_friction
        };
        vehicle.vel.x *= friction;
        vehicle.angular_vel *= tuning.ground_angular_damping;
    }
    vehicle.vel.x *= tuning.air_drag;
    vehicle.angular_vel *= tuning.angular_damping;

    contact
}

/// True if either wheel would penetrate the ground at the given pose.
fn wheel_touches(vehicle: &Vehicle, pos: Vec2, angle: f32, level_index: u32) -> bool {
    for local in [vehicle.front_wheel_local(), vehicle.rear_wheel_local()] {
        let wp = Vehicle::local_to_world_at(pos, angle, local);
        let ground = terrain::sample(wp.x, level_index);
        if wp.y > ground.height - vehicle.wheel_radius {
            return true;
        }
    }
    false
}

/// Push one wheel out of the ground and rotate the chassis toward the local
/// slope. Returns whether the wheel was in contact.
fn settle_wheel(
    vehicle: &mut Vehicle,
    local: Vec2,
    level_index: u32,
    tuning: &Tuning,
    dt: f32,
) -> bool {
    let wp = vehicle.local_to_world(local);
    let ground = terrain::sample(wp.x, level_index);
    let penetration = wp.y - (ground.height - vehicle.wheel_radius);
    if penetration <= 0.0 {
        return false;
    }

    vehicle.pos.y -= penetration;
    vehicle.vel.y = vehicle.vel.y.min(0.0);

    let target = ground.slope.atan();
    let delta = wrap_angle(target - vehicle.angle);
    let max_turn = tuning.align_rate * dt;
    vehicle.angle += delta.clamp(-max_turn, max_turn);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn airborne_vehicle() -> Vehicle {
        let mut v = Vehicle::default();
        // Well above the terrain envelope at level 0
        v.pos = Vec2::new(400.0, 100.0);
        v
    }

    #[test]
    fn test_airborne_gravity_only() {
        let tuning = Tuning::default();
        let mut v = airborne_vehicle();

        let contact = step(&mut v, true, 0, &tuning, SIM_DT);
        assert!(!contact.any());
        assert!(v.vel.y > 0.0);
        assert!(v.pos.y > 100.0);
        assert_eq!(v.vel.x, 0.0);
    }

    #[test]
    fn test_wheels_do_not_tunnel() {
        let tuning = Tuning::default();
        let mut v = Vehicle::default();
        v.reset(10.0, terrain::sample(10.0, 0).height);
        // Slam it downward harder than any jump produces
        v.vel.y = 900.0;

        for _ in 0..240 {
            step(&mut v, true, 0, &tuning, SIM_DT);
            for wp in [v.front_wheel(), v.rear_wheel()] {
                let ground = terrain::sample(wp.x, 0).height;
                // Pushout resolves within the tick; the post-pushout slope
                // alignment can rotate a wheel slightly back in.
                assert!(wp.y <= ground - v.wheel_radius + 2.0);
            }
        }
    }

    #[test]
    fn test_grounded_acceleration_moves_forward() {
        let tuning = Tuning::default();
        let mut v = Vehicle::default();
        v.reset(10.0, terrain::sample(10.0, 0).height);

        // Let it settle onto the ground first
        for _ in 0..60 {
            step(&mut v, true, 0, &tuning, SIM_DT);
        }

        v.accelerate_held = true;
        let mut prev_x = v.pos.x;
        for _ in 0..120 {
            step(&mut v, true, 0, &tuning, SIM_DT);
            assert!(v.pos.x > prev_x);
            prev_x = v.pos.x;
        }
    }

    #[test]
    fn test_empty_tank_ignores_thrust() {
        let tuning = Tuning::default();
        let mut v = Vehicle::default();
        v.reset(10.0, terrain::sample(10.0, 0).height);
        for _ in 0..60 {
            step(&mut v, false, 0, &tuning, SIM_DT);
        }

        v.accelerate_held = true;
        let before = v.angular_vel;
        step(&mut v, false, 0, &tuning, SIM_DT);
        // No torque applied; only damping and contact alignment act
        assert!(v.angular_vel.abs() <= before.abs() + 1e-4);
        assert!(v.vel.x.abs() < 1.0);
    }

    #[test]
    fn test_contact_aligns_toward_slope() {
        let tuning = Tuning::default();
        let mut v = Vehicle::default();
        let x = 10.0;
        v.reset(x, terrain::sample(x, 0).height);
        v.angle = 0.6;

        // Each alignment rotation lifts a wheel clear of the ground, so
        // contact is intermittent and convergence takes several seconds of
        // simulated time, well below the nominal align_rate.
        for _ in 0..960 {
            step(&mut v, true, 0, &tuning, SIM_DT);
        }
        let slope_angle = terrain::sample(v.pos.x, 0).slope.atan();
        assert!((v.angle - slope_angle).abs() < 0.2);
    }
}
