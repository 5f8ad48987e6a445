//! Build fully-initialized simulation scenarios.
//!
//! A `Scenario` bundles everything one run needs: the initial universe,
//! the integration parameters (`num_gens`, `dt`, `theta`) and the
//! rendering parameters (canvas width, frame frequency, radius scaling).
//! Scenarios come from three places:
//! - the built-in presets (`jupiter`, `galaxy`, `collision`),
//! - a YAML file via [`Scenario::from_config`],
//! - the galaxy generators below, for callers assembling their own.

use std::f64::consts::PI;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::configuration::universe_file::{read_universe, UniverseFileError};
use crate::simulation::forces::G;
use crate::simulation::states::{Body, NVec2, Rgb, Universe};

/// Mass of the sun in kg; the default star mass.
pub const SOLAR_MASS: f64 = 1.989e30;
/// Radius of the sun in m; the default star draw radius.
pub const SOLAR_RADIUS: f64 = 6.9634e8;
/// Mass of the black hole seeded at each galactic center, kg.
pub const BLACK_HOLE_MASS: f64 = 7.956e36;

/// A galaxy is just a list of bodies sharing a center.
pub type Galaxy = Vec<Body>;

/// A fully-initialized run: initial state plus every parameter the
/// driver and the renderer need.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub universe: Universe,
    pub num_gens: usize,
    pub dt: f64,
    pub theta: f64,
    pub canvas_width: u32,
    pub frequency: usize,
    pub scaling_factor: f64,
}

impl Scenario {
    /// Jupiter and the Galilean moons, read from a universe text file.
    pub fn jupiter(path: impl AsRef<Path>) -> Result<Self, UniverseFileError> {
        let universe = read_universe(path)?;
        Ok(Self {
            name: "jupiter".into(),
            universe,
            num_gens: 50_000,
            dt: 7.0,
            theta: 0.5,
            canvas_width: 1000,
            frequency: 1000,
            scaling_factor: 5.0,
        })
    }

    /// A single spinning galaxy of 500 stars around a central black hole.
    pub fn galaxy(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = initialize_galaxy(&mut rng, 500, 4e21, 5e22, 5e22);
        Self {
            name: "galaxy".into(),
            universe: initialize_universe(vec![g], 1.0e23),
            num_gens: 100_000,
            dt: 2e14,
            theta: 0.5,
            canvas_width: 1000,
            frequency: 1000,
            scaling_factor: 1e11,
        }
    }

    /// Two galaxies pushed toward each other on a collision course.
    pub fn collision(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g0 = initialize_galaxy(&mut rng, 500, 4e21, 2e22, 5e22);
        let mut g1 = initialize_galaxy(&mut rng, 500, 4e21, 4e22, 5.2e22);
        push(&mut g0, 1e3, 0.0);
        push(&mut g1, -1e3, 0.0);
        Self {
            name: "collision".into(),
            universe: initialize_universe(vec![g0, g1], 1.0e23),
            num_gens: 100_000,
            dt: 2e14,
            theta: 0.5,
            canvas_width: 1000,
            frequency: 1000,
            scaling_factor: 1e11,
        }
    }

    /// Map a YAML-facing [`ScenarioConfig`] onto a runtime scenario,
    /// validating the pieces serde cannot.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        if cfg.universe.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(cfg.universe.width));
        }

        let mut bodies = Vec::with_capacity(cfg.universe.bodies.len());
        for bc in &cfg.universe.bodies {
            if bc.x.len() != 2 {
                return Err(ConfigError::BadComponents("x", 2));
            }
            if bc.v.len() != 2 {
                return Err(ConfigError::BadComponents("v", 2));
            }
            if bc.color.len() != 3 {
                return Err(ConfigError::BadComponents("color", 3));
            }
            if bc.m <= 0.0 {
                return Err(ConfigError::InvalidBodyMass(bc.m));
            }
            bodies.push(Body {
                x: NVec2::new(bc.x[0], bc.x[1]),
                v: NVec2::new(bc.v[0], bc.v[1]),
                a: NVec2::zeros(),
                m: bc.m,
                radius: bc.radius,
                color: Rgb {
                    red: bc.color[0],
                    green: bc.color[1],
                    blue: bc.color[2],
                },
            });
        }

        Ok(Self {
            name: cfg.name,
            universe: Universe {
                width: cfg.universe.width,
                bodies,
            },
            num_gens: cfg.simulation.num_gens,
            dt: cfg.simulation.dt,
            theta: cfg.simulation.theta,
            canvas_width: cfg.rendering.canvas_width,
            frequency: cfg.rendering.frequency,
            scaling_factor: cfg.rendering.scaling_factor,
        })
    }
}

/// Generate a spinning galaxy of `num_stars` stars plus a central black
/// hole, centered at `(x, y)` with radius `r`.
pub fn initialize_galaxy(rng: &mut StdRng, num_stars: usize, r: f64, x: f64, y: f64) -> Galaxy {
    let mut g = Vec::with_capacity(num_stars + 1);

    for _ in 0..num_stars {
        // Distance to the galactic center, uniform in [r/2, r).
        let dist = (rng.gen::<f64>() + 1.0) / 2.0 * r;
        // Angular placement around the center.
        let angle = rng.gen::<f64>() * 2.0 * PI;

        let position = NVec2::new(x + dist * angle.cos(), y + dist * angle.sin());

        // Half of the circular orbital speed around the central black
        // hole, directed tangentially to spin the galaxy.
        let speed = 0.5 * (G * BLACK_HOLE_MASS / dist).sqrt();
        let velocity = NVec2::new(
            speed * (angle + PI / 2.0).cos(),
            speed * (angle + PI / 2.0).sin(),
        );

        g.push(Body {
            x: position,
            v: velocity,
            a: NVec2::zeros(),
            m: SOLAR_MASS,
            radius: SOLAR_RADIUS,
            color: Rgb { red: 255, green: 255, blue: 255 },
        });
    }

    // The black hole anchoring the galactic center. Drawn ten times the
    // size of a star so it stays visible.
    g.push(Body {
        x: NVec2::new(x, y),
        v: NVec2::zeros(),
        a: NVec2::zeros(),
        m: BLACK_HOLE_MASS,
        radius: 10.0 * SOLAR_RADIUS,
        color: Rgb { red: 0, green: 0, blue: 255 },
    });

    g
}

/// Flatten a collection of galaxies into one universe of the given width.
pub fn initialize_universe(galaxies: Vec<Galaxy>, width: f64) -> Universe {
    let bodies = galaxies.into_iter().flatten().collect();
    Universe { width, bodies }
}

/// Add a bulk velocity to every body of a galaxy.
pub fn push(g: &mut Galaxy, vx: f64, vy: f64) {
    for b in g.iter_mut() {
        b.v.x += vx;
        b.v.y += vy;
    }
}
