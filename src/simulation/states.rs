//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/universe structs:
//! - `Body` holding kinematic state plus the render attributes it carries
//! - `Universe` holding the bounding width and the list of bodies
//!
//! A snapshot of the simulation is just an owned `Universe` value;
//! `clone()` is a deep copy because every field is plain data.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Display color carried by each body. Opaque to the physics; the
/// renderer uses it when rasterizing frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration
    pub m: f64, // mass, always positive
    pub radius: f64, // draw radius, untouched by the physics
    pub color: Rgb, // draw color, untouched by the physics
}

#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    pub width: f64, // side of the simulation square; the root sector is (0, 0, width)
    pub bodies: Vec<Body>, // index positions are stable across snapshots
}
