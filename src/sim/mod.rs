//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness (the terrain is closed-form)
//! - No rendering or platform dependencies
//!
//! Coordinate convention: +x is forward, +y is DOWN (screen convention of the
//! host renderer). "Below ground" therefore means `y >= ground height`.

pub mod dynamics;
pub mod level;
pub mod progress;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod vehicle;

pub use dynamics::GroundContact;
pub use level::{Coin, FuelCan, Level};
pub use state::{GameState, RunEvent, Screen};
pub use terrain::GroundSample;
pub use tick::{TickInput, tick};
pub use vehicle::Vehicle;
