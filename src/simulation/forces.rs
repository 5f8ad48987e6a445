//! Gravitational force evaluation.
//!
//! Two evaluators live side by side: the Barnes-Hut tree traversal used
//! by the integrator, and the exact `O(N^2)` direct sum kept as the
//! reference implementation (a traversal with `theta = 0` must agree
//! with it) and as the benchmark baseline.

use crate::simulation::quadtree::{NodeKind, QuadTree};
use crate::simulation::states::{NVec2, Universe};

/// Gravitational constant, SI units. The universe text format carries
/// its own G line; that value is read and discarded in favor of this one.
pub const G: f64 = 6.67408e-11;

/// Exact two-body force on a query of mass `q_mass` at `q_pos` from a
/// source of mass `mass` at `position`: attractive, magnitude
/// `G m1 m2 / d^2`, directed from the query toward the source.
/// Coincident points contribute nothing.
pub fn pair_force(q_pos: NVec2, q_mass: f64, position: NVec2, mass: f64) -> NVec2 {
    let offset = position - q_pos;
    let dist = offset.norm();
    if dist == 0.0 {
        return NVec2::zeros();
    }
    let magnitude = G * q_mass * mass / (dist * dist);
    magnitude * offset / dist
}

/// Net gravitational force on body `query` of the universe the tree was
/// built from, approximated with opening parameter `theta`.
///
/// `query` is the body's index in that universe and is the identity used
/// for self-exclusion. Comparing coordinates instead would misfire on
/// legitimately coincident bodies.
pub fn net_force(tree: &QuadTree, query: usize, q_pos: NVec2, q_mass: f64, theta: f64) -> NVec2 {
    let force = node_force(tree, tree.root, query, q_pos, q_mass, theta);
    debug_assert!(
        force.x.is_finite() && force.y.is_finite(),
        "non-finite force on body {query}"
    );
    force
}

fn node_force(
    tree: &QuadTree,
    node_idx: usize,
    query: usize,
    q_pos: NVec2,
    q_mass: f64,
    theta: f64,
) -> NVec2 {
    let node = &tree.nodes[node_idx];
    match node.kind {
        NodeKind::Empty => NVec2::zeros(),

        // A leaf contributes its exact pair force, unless it holds the
        // query body itself.
        NodeKind::Leaf { body, position, mass } => {
            if body == query {
                return NVec2::zeros();
            }
            pair_force(q_pos, q_mass, position, mass)
        }

        NodeKind::Internal { children, mass, com } => {
            let dist = (com - q_pos).norm();
            if dist == 0.0 {
                return NVec2::zeros();
            }
            let ratio = node.sector.width / dist;
            if ratio < theta {
                // Far enough away: collapse the subtree to its aggregate.
                pair_force(q_pos, q_mass, com, mass)
            } else {
                // Too close: descend instead of using the aggregate.
                let mut force = NVec2::zeros();
                for &child in &children {
                    force += node_force(tree, child, query, q_pos, q_mass, theta);
                }
                force
            }
        }
    }
}

/// Exact `O(N^2)` net force on body `query`, self excluded by index.
pub fn direct_net_force(universe: &Universe, query: usize) -> NVec2 {
    let q = &universe.bodies[query];
    let mut force = NVec2::zeros();
    for (j, b) in universe.bodies.iter().enumerate() {
        if j == query {
            continue;
        }
        force += pair_force(q.x, q.m, b.x, b.m);
    }
    force
}
