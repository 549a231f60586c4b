use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dottri::driver::run_games;
use dottri::env_config::init_rayon_threads_lenient;
use dottri::oracle::OracleKind;

/// Report the winner of each dots-and-triangles game under optimal play.
#[derive(Parser, Debug)]
#[command(name = "dottri", version)]
struct Args {
    /// Evaluation strategy.
    #[arg(long, value_enum, env = "DOTTRI_ORACLE", default_value_t = OracleKind::Table)]
    oracle: OracleKind,

    /// Log the value of every legal move after the forced prefix to stderr.
    #[arg(long)]
    explain: bool,

    /// Read games from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.oracle == OracleKind::TableParallel {
        init_rayon_threads_lenient();
    }

    let input = read_input(args.input.as_ref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_games(&input, args.oracle, args.explain, &mut out).context("failed to answer games")?;
    Ok(())
}
