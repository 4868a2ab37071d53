//! Level layout
//!
//! Per-level pickup placement and finish line. Layout is fully determined by
//! the level index, so rebuilding a level always produces the same field.

use serde::{Deserialize, Serialize};

use crate::consts::{
    COIN_HOVER, COINS_PER_LEVEL, FIRST_CAN_METERS, FUEL_CAN_GAP_METERS, LEVEL_COUNT, LEVEL_METERS,
};
use crate::sim::terrain;
use crate::units_from_meters;

/// A fuel can resting on the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelCan {
    pub x: f32,
    pub taken: bool,
}

/// A collectible coin hovering above the terrain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub taken: bool,
}

/// One level: its finish line and its pickups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub index: u32,
    /// Level length in meters (what the HUD shows)
    pub length_meters: f32,
    /// Level length in world units
    pub length: f32,
    /// Crossing this x completes the level
    pub finish_x: f32,
    pub cans: Vec<FuelCan>,
    pub coins: Vec<Coin>,
}

impl Level {
    /// Build the pickup field for `index`. Out-of-range indices clamp to the
    /// last level.
    pub fn build(index: u32) -> Self {
        let index = index.min(LEVEL_COUNT - 1);
        let length_meters = LEVEL_METERS[index as usize];
        let length = units_from_meters(length_meters);
        let finish_x = length;

        let mut cans = Vec::new();
        let gap = units_from_meters(FUEL_CAN_GAP_METERS);
        let mut x = units_from_meters(FIRST_CAN_METERS);
        while x < finish_x {
            cans.push(FuelCan { x, taken: false });
            x += gap;
        }

        // Coins spread evenly along the interior, tracking the ground line
        let mut coins = Vec::with_capacity(COINS_PER_LEVEL);
        if length > 0.0 {
            let coin_gap = length / (COINS_PER_LEVEL as f32 + 1.0);
            for i in 1..=COINS_PER_LEVEL {
                let x = i as f32 * coin_gap;
                let y = terrain::sample(x, index).height - COIN_HOVER;
                coins.push(Coin { x, y, taken: false });
            }
        }

        Level {
            index,
            length_meters,
            length,
            finish_x,
            cans,
            coins,
        }
    }
}
