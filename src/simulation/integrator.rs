//! Fixed-step driver for the Barnes-Hut simulation.
//!
//! `barnes_hut` advances an initial universe through `num_gens` steps and
//! returns every snapshot, the input included, as independent deep
//! copies. Each step builds a fresh quadtree from the previous snapshot,
//! computes the net force on every body against that frozen tree, and
//! applies the kinematic update.

use rayon::prelude::*;

use crate::simulation::forces::net_force;
use crate::simulation::quadtree::QuadTree;
use crate::simulation::states::Universe;

/// Run the simulation. Snapshot 0 is `initial`; snapshot k is derived
/// from snapshot k-1 by one [`step`]. Every element of the returned
/// sequence owns its bodies exclusively, so downstream consumers may
/// mutate snapshots freely without affecting the others.
pub fn barnes_hut(initial: Universe, num_gens: usize, dt: f64, theta: f64) -> Vec<Universe> {
    let mut time_points = Vec::with_capacity(num_gens + 1);
    time_points.push(initial);

    for i in 1..=num_gens {
        let next = step(&time_points[i - 1], dt, theta);
        time_points.push(next);
    }
    time_points
}

/// Advance `prev` by one step of length `dt`.
///
/// The quadtree is built from `prev` and stays frozen for the whole
/// step, so no body's force computation observes another body's updated
/// state. Each body writes a disjoint slot of the next snapshot and
/// reads only `prev` and the tree, which makes the per-body loop safe
/// to run in parallel.
pub fn step(prev: &Universe, dt: f64, theta: f64) -> Universe {
    let mut next = prev.clone();
    let tree = QuadTree::build(prev);

    next.bodies.par_iter_mut().enumerate().for_each(|(i, body)| {
        // Zero on the very first step: the initial universe carries no
        // acceleration yet.
        let a_old = body.a;
        let v_old = body.v;

        // Query with the body's slot in prev; the tree was built from
        // prev, so index i is the self-exclusion key.
        let source = &prev.bodies[i];
        let force = net_force(&tree, i, source.x, source.m, theta);
        let a_new = force / body.m;

        body.a = a_new;
        // v_new = v_old + (a_new + a_old)/2 * dt
        body.v = v_old + 0.5 * (a_new + a_old) * dt;
        // p_new = p_old + v_old * dt + a_old/2 * dt^2, from the old
        // velocity and old acceleration.
        body.x += v_old * dt + 0.5 * a_old * (dt * dt);
    });

    next
}
