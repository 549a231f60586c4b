use std::time::Instant;

use anyhow::{ensure, Result};
use clap::Parser;

use dottri::constants::*;
use dottri::env_config::init_rayon_threads_lenient;
use dottri::memo_solver::MemoSolver;
use dottri::replay::{analyze_moves, ReplayState};
use dottri::state_computation::{compute_all_board_values, compute_all_board_values_parallel};
use dottri::topology::precompute_lookup_tables;
use dottri::types::GameContext;

/// Build the full board-value table, cross-check the strategies, and print
/// the opening analysis.
#[derive(Parser, Debug)]
#[command(name = "dottri-precompute", version)]
struct Args {
    /// Also run the sequential pass and the memoized search and compare tables.
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    eprintln!("Dots-and-triangles precomputation tool");
    init_rayon_threads_lenient();

    let mut ctx = GameContext::new_boxed();
    precompute_lookup_tables(&mut ctx);
    compute_all_board_values_parallel(&mut ctx);

    if args.verify {
        let mut seq = GameContext::new_boxed();
        precompute_lookup_tables(&mut seq);
        compute_all_board_values(&mut seq);
        ensure!(
            seq.board_values() == ctx.board_values(),
            "sequential and level-parallel tables differ"
        );
        eprintln!("Sequential pass matches level-parallel pass");

        let t0 = Instant::now();
        let mut memo = MemoSolver::new(&ctx.topology);
        let root = memo.board_value(EMPTY_BOARD);
        let mismatches = (0..NUM_BOARDS as Board)
            .filter(|&b| memo.cached_value(b) != ctx.board_value(b))
            .count();
        ensure!(mismatches == 0, "memoized search disagrees on {mismatches} boards");
        eprintln!(
            "Memoized search matches on {} boards (V(empty) = {}) in {:.3} s",
            memo.cached_boards(),
            root,
            t0.elapsed().as_secs_f64()
        );
    }

    let mut histogram = [0usize; 19];
    for &v in ctx.board_values() {
        histogram[(v as i32 + 9) as usize] += 1;
    }
    println!("Value | Boards");
    println!("------|-------");
    for (i, &count) in histogram.iter().enumerate() {
        if count > 0 {
            println!("  {:+3} | {:6}", i as i32 - 9, count);
        }
    }

    println!();
    println!("V(empty) = {}", ctx.board_values()[EMPTY_BOARD as usize]);
    let moves = analyze_moves(&ctx.topology, &ReplayState::start(), |b| {
        ctx.board_values()[b as usize] as i32
    });
    for m in moves {
        println!("First move {},{} gives {}", m.endpoints.0, m.endpoints.1, m.value);
    }
    Ok(())
}
