//! Configuration types for loading custom scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a scenario. A scenario consists of:
//!
//! - [`UniverseConfig`]   - bounding width and initial bodies
//! - [`SimulationConfig`] - generation count, time step and theta
//! - [`RenderingConfig`]  - canvas size, frame frequency, radius scaling
//! - [`ScenarioConfig`]   - top-level wrapper used to load a file
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! name: binary_pair
//!
//! universe:
//!   width: 10.0
//!   bodies:
//!     - x: [ 3.0, 5.0 ]
//!       v: [ 0.0, 0.0 ]
//!       m: 1.0e30
//!       radius: 0.05
//!       color: [ 255, 200, 80 ]
//!     - x: [ 7.0, 5.0 ]
//!       v: [ 0.0, 0.0 ]
//!       m: 1.0e30
//!       radius: 0.05
//!       color: [ 80, 200, 255 ]
//!
//! simulation:
//!   num_gens: 1000
//!   dt: 50.0
//!   theta: 0.5
//!
//! rendering:
//!   canvas_width: 1000
//!   frequency: 10
//!   scaling_factor: 1.0
//! ```
//!
//! [`crate::Scenario::from_config`] maps this configuration into the
//! runtime scenario representation, validating what serde cannot
//! (vector arity, positive mass and width).

use serde::Deserialize;
use thiserror::Error;

/// Rejections raised while mapping a parsed configuration onto runtime
/// types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field `{0}` must have exactly {1} components")]
    BadComponents(&'static str, usize),
    #[error("body mass must be positive, got {0}")]
    InvalidBodyMass(f64),
    #[error("universe width must be positive, got {0}")]
    InvalidWidth(f64),
}

/// Initial state for a single body.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
    pub m: f64,      // mass, must be positive
    pub radius: f64, // draw radius
    pub color: Vec<u8>, // red, green, blue
}

/// The bounding square and its inhabitants.
#[derive(Deserialize, Debug)]
pub struct UniverseConfig {
    pub width: f64,
    pub bodies: Vec<BodyConfig>,
}

/// Integration parameters.
#[derive(Deserialize, Debug)]
pub struct SimulationConfig {
    pub num_gens: usize, // number of steps; num_gens + 1 snapshots come back
    pub dt: f64,         // step size in seconds
    pub theta: f64,      // opening parameter; 0 degenerates to the direct sum
}

/// Rendering parameters for the GIF output.
#[derive(Deserialize, Debug)]
pub struct RenderingConfig {
    pub canvas_width: u32,   // square canvas side in pixels
    pub frequency: usize,    // draw every frequency-th snapshot
    pub scaling_factor: f64, // multiplies body radii so small bodies stay visible
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String, // also names the output GIF
    pub universe: UniverseConfig,
    pub simulation: SimulationConfig,
    pub rendering: RenderingConfig,
}

fn default_name() -> String {
    "custom".into()
}
