pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, NVec2, Rgb, Universe};
pub use simulation::quadtree::{Node, NodeKind, QuadTree, Quadrant};
pub use simulation::forces::{direct_net_force, net_force, pair_force, G};
pub use simulation::integrator::{barnes_hut, step};
pub use simulation::scenario::{
    initialize_galaxy, initialize_universe, push, Galaxy, Scenario, BLACK_HOLE_MASS, SOLAR_MASS,
    SOLAR_RADIUS,
};

pub use configuration::config::{
    BodyConfig, ConfigError, RenderingConfig, ScenarioConfig, SimulationConfig, UniverseConfig,
};
pub use configuration::universe_file::{parse_universe, read_universe, UniverseFileError};

pub use visualization::render::{animate_system, images_to_gif};

pub use benchmark::benchmark::bench_forces;
