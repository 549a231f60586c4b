//! Phase 0: compile the fixed board graph into lookup tables.
//!
//! [`precompute_lookup_tables`] runs the sub-steps in dependency order:
//!
//! 1. **Edge lookup** — endpoints per edge id and the symmetric (v1, v2) → edge id table
//! 2. **Triangle masks** — one 3-bit mask per face
//! 3. **Edge membership** — which faces each edge borders (for O(1) score deltas)
//! 4. **Terminal board** — DP base case: V(FULL_BOARD) = 0

use std::time::Instant;

use crate::constants::*;
use crate::types::{GameContext, Topology};

/// Fill `endpoints` and `edge_lookup` from [`EDGE_TABLE`].
pub fn build_edge_lookup(topology: &mut Topology) {
    for &(v1, v2, e) in EDGE_TABLE.iter() {
        debug_assert!((1..=VERTEX_COUNT as u8).contains(&v1) && (1..=VERTEX_COUNT as u8).contains(&v2));
        let (lo, hi) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
        topology.endpoints[e as usize] = (lo, hi);
        topology.edge_lookup[v1 as usize][v2 as usize] = e as i8;
        topology.edge_lookup[v2 as usize][v1 as usize] = e as i8;
    }
}

/// Compile [`TRIANGLE_EDGES`] into one mask per face.
pub fn build_triangle_masks(topology: &mut Topology) {
    for (t, edges) in TRIANGLE_EDGES.iter().enumerate() {
        topology.triangle_masks[t] = edges
            .iter()
            .fold(0, |mask, &e| mask | edge_bit(e as EdgeId));
    }
}

/// Record, for each edge, the masks of the faces it borders.
///
/// Interior edges border two faces, rim edges one.
pub fn build_edge_membership(topology: &mut Topology) {
    topology.edge_triangle_count = [0; EDGE_COUNT];
    for t in 0..TRIANGLE_COUNT {
        let mask = topology.triangle_masks[t];
        for e in 0..EDGE_COUNT {
            if is_edge_claimed(mask, e) {
                let slot = topology.edge_triangle_count[e] as usize;
                debug_assert!(slot < MAX_TRIANGLES_PER_EDGE, "edge {e} in too many faces");
                topology.edge_triangles[e][slot] = mask;
                topology.edge_triangle_count[e] += 1;
            }
        }
    }
}

/// Run every topology step. Idempotent.
pub fn compile_topology(topology: &mut Topology) {
    build_edge_lookup(topology);
    build_triangle_masks(topology);
    build_edge_membership(topology);
}

/// DP base case: the full board has no legal moves, so its value is 0.
pub fn initialize_final_board(ctx: &mut GameContext) {
    ctx.board_values[FULL_BOARD as usize] = 0;
}

/// Run all Phase 0 steps with per-step timing on stderr.
pub fn precompute_lookup_tables(ctx: &mut GameContext) {
    eprintln!("=== Phase 0: Compile Board Topology ===");
    let phase0_start = Instant::now();

    macro_rules! timed {
        ($label:expr, $body:expr) => {{
            let t0 = Instant::now();
            $body;
            let dt = t0.elapsed().as_secs_f64() * 1000.0;
            eprintln!("  {:<42} {:>8.3} ms", $label, dt);
        }};
    }

    timed!("Edge lookup (18 edges)", build_edge_lookup(&mut ctx.topology));
    timed!("Triangle masks (9 faces)", build_triangle_masks(&mut ctx.topology));
    timed!("Edge membership", build_edge_membership(&mut ctx.topology));
    timed!("Terminal board", initialize_final_board(ctx));

    let total = phase0_start.elapsed().as_secs_f64() * 1000.0;
    eprintln!("  {:<42} {:>8.3} ms", "TOTAL Phase 0", total);
    eprintln!();
}
