//! Timing comparison between the direct sum and the tree traversal.

use std::time::Instant;

use crate::simulation::forces::{direct_net_force, net_force};
use crate::simulation::quadtree::QuadTree;
use crate::simulation::states::{Body, NVec2, Rgb, Universe};

/// Time one full force pass over systems of growing size, direct sum
/// against Barnes-Hut at theta = 0.5, and print a table.
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let universe = make_universe(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up both paths
        out[0] = direct_net_force(&universe, 0);
        let warm = QuadTree::build(&universe);
        out[0] = net_force(&warm, 0, universe.bodies[0].x, universe.bodies[0].m, 0.5);

        // Time direct
        let t0 = Instant::now();
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = direct_net_force(&universe, i);
        }
        let dt_direct = t0.elapsed().as_secs_f64();

        // Time tree build + traversal
        let t1 = Instant::now();
        let tree = QuadTree::build(&universe);
        for (i, slot) in out.iter_mut().enumerate() {
            let b = &universe.bodies[i];
            *slot = net_force(&tree, i, b.x, b.m, 0.5);
        }
        let dt_tree = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s, tree = {dt_tree:8.6} s");
    }
}

/// Build a universe of size `n` with deterministic positions, no rand
/// needed.
fn make_universe(n: usize) -> Universe {
    let width = 10.0;
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            5.0 + (i_f * 0.37).sin() * 4.9,
            5.0 + (i_f * 0.13).cos() * 4.9,
        );

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m: 1.0,
            radius: 0.01,
            color: Rgb { red: 255, green: 255, blue: 255 },
        });
    }

    Universe { width, bodies }
}
