//! The two-wheeled vehicle
//!
//! Pose, velocity and rigid geometry, plus the local-frame anchor points the
//! rest of the simulation probes: two wheels, and the rider's head whose
//! ground contact ends the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Vehicle state (chassis center of mass)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Chassis center position (units, +y down)
    pub pos: Vec2,
    /// Linear velocity (units/s)
    pub vel: Vec2,
    /// Orientation (radians, 0 along +x)
    pub angle: f32,
    /// Angular velocity (rad/s)
    pub angular_vel: f32,

    // Rigid geometry (units)
    pub body_w: f32,
    pub body_h: f32,
    pub wheel_base: f32,
    pub wheel_radius: f32,

    // Level-triggered input flags, set by the host each tick
    pub accelerate_held: bool,
    pub decelerate_held: bool,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            body_w: 90.0,
            body_h: 28.0,
            wheel_base: 70.0,
            wheel_radius: 18.0,
            accelerate_held: false,
            decelerate_held: false,
        }
    }
}

impl Vehicle {
    /// Transform a chassis-local point into world space at an arbitrary pose
    #[inline]
    pub fn local_to_world_at(pos: Vec2, angle: f32, local: Vec2) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2::new(
            pos.x + c * local.x - s * local.y,
            pos.y + s * local.x + c * local.y,
        )
    }

    /// Transform a chassis-local point into world space at the current pose
    #[inline]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        Self::local_to_world_at(self.pos, self.angle, local)
    }

    /// Front wheel center in the chassis frame
    #[inline]
    pub fn front_wheel_local(&self) -> Vec2 {
        Vec2::new(self.wheel_base * 0.5, self.body_h * 0.5)
    }

    /// Rear wheel center in the chassis frame
    #[inline]
    pub fn rear_wheel_local(&self) -> Vec2 {
        Vec2::new(-self.wheel_base * 0.5, self.body_h * 0.5)
    }

    /// Rider head point in the chassis frame (above the body; -y is up)
    #[inline]
    pub fn head_local(&self) -> Vec2 {
        Vec2::new(0.0, -self.body_h * 0.9)
    }

    pub fn front_wheel(&self) -> Vec2 {
        self.local_to_world(self.front_wheel_local())
    }

    pub fn rear_wheel(&self) -> Vec2 {
        self.local_to_world(self.rear_wheel_local())
    }

    pub fn head_point(&self) -> Vec2 {
        self.local_to_world(self.head_local())
    }

    /// The three points used for proximity pickup tests: chassis center and
    /// both wheel centers. A cheap collision proxy, not a hull.
    pub fn probe_points(&self) -> [Vec2; 3] {
        [self.pos, self.front_wheel(), self.rear_wheel()]
    }

    /// Place the vehicle at the level start: 2 units of clearance above ride
    /// height over `ground_y`, with a slight initial lean.
    pub fn reset(&mut self, start_x: f32, ground_y: f32) {
        self.pos = Vec2::new(
            start_x,
            ground_y - self.wheel_radius - self.body_h * 0.5 - 2.0,
        );
        self.vel = Vec2::ZERO;
        self.angle = 0.02;
        self.angular_vel = 0.0;
        self.accelerate_held = false;
        self.decelerate_held = false;
    }
}
