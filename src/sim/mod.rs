//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Components advance in a fixed order each tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod ground;
pub mod obstacle;
pub mod progression;
pub mod runner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, circle_aabb_overlap};
pub use ground::{GroundStrip, GroundTile};
pub use obstacle::{Obstacle, ObstacleField};
pub use runner::Runner;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
