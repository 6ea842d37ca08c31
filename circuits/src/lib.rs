pub mod config;
pub mod dsu;
pub mod edges;
pub mod error;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod scene;

/// A junction box position.
pub type Point = glam::DVec3;

pub use error::CircuitError;
pub use scene::Scene;
