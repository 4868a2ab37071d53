//! Procedural terrain field
//!
//! A pure, stateless function from (x, level index) to ground height and local
//! slope, callable at arbitrary real x so contact checks and the host renderer
//! always agree on the geometry. Amplitude and frequency both grow with the
//! level index, making later levels visibly rougher.

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_BASE_Y, LEVEL_COUNT};

/// Ground height and slope at one horizontal position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSample {
    /// Ground line y (+y is down, so larger is lower)
    pub height: f32,
    /// Local slope dy/dx
    pub slope: f32,
}

/// Sample the terrain at `x` for the given level.
///
/// The slope is a one-unit forward finite difference, not the analytic
/// derivative; the contact alignment rate is tuned against this
/// approximation's small bias, so it must stay numerical.
pub fn sample(x: f32, level_index: u32) -> GroundSample {
    let level = level_index.min(LEVEL_COUNT - 1) as f32;
    let rough = 15.0 + level * 10.0;
    let freq1 = 1.0 / 140.0 + level * 0.0008;
    let freq2 = 1.0 / 280.0 + level * 0.0005;

    let height_at = |x: f32| {
        GROUND_BASE_Y
            - rough * (x * freq1).sin()
            - 0.6 * rough * (x * freq2 + 1.7).sin()
            - 0.3 * rough * (x * (freq1 * 2.3) + 0.6).sin()
    };

    let height = height_at(x);
    let slope = height_at(x + 1.0) - height;
    GroundSample { height, slope }
}
