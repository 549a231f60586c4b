//! Environment configuration shared by the binaries.
//!
//! `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8) sizes the pool
//! used by the level-parallel table pass. The oracle strategy is read by clap
//! from `DOTTRI_ORACLE`.

/// Requested thread count from the environment.
pub fn rayon_threads_from_env() -> usize {
    std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
        .unwrap_or(8)
}

/// Build the rayon global pool that
/// [`crate::state_computation::compute_all_board_values_parallel`] spreads each
/// popcount level over, tolerating an already-initialized pool.
/// Returns thread count.
pub fn init_rayon_threads_lenient() -> usize {
    let num_threads = rayon_threads_from_env();
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    eprintln!("Rayon threads: {}", num_threads);
    num_threads
}
