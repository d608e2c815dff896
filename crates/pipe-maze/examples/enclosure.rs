//! Example: end-to-end maze analysis.
//!
//! Parses a tile map (a file given with `--map`, or a built-in sample),
//! extracts the loop, classifies enclosed tiles, and prints the enclosure
//! map followed by the tile census. With `--out` the census is also
//! written as JSON.
//!
//! Run from the workspace root:
//!   cargo run -p pipe-maze --example enclosure -- --help
//!   cargo run -p pipe-maze --example enclosure

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pipe_maze::{Grid, classify_interior, extract_loop, render_enclosure, summarize};
use serde::Serialize;

const SAMPLE_MAP: &str = concat!(
    "...........\n",
    ".S-------7.\n",
    ".|F-----7|.\n",
    ".||.....||.\n",
    ".||.....||.\n",
    ".|L-7.F-J|.\n",
    ".|..|.|..|.\n",
    ".L--J.L--J.\n",
    "...........\n",
);

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Extract a pipe loop and classify the tiles it encloses")]
struct Args {
    /// Path to a tile map (default: a built-in sample)
    #[arg(long)]
    map: Option<String>,

    /// Output JSON path for the census
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SymbolCountDto {
    symbol: char,
    count: usize,
}

#[derive(Serialize)]
struct CensusDto {
    rows: usize,
    cols: usize,
    total_tiles: usize,
    symbols: Vec<SymbolCountDto>,
    loop_tiles: usize,
    farthest_distance: usize,
    interior_tiles: usize,
    exterior_tiles: usize,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.map {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
        }
        None => SAMPLE_MAP.to_string(),
    };

    let t0 = Instant::now();
    let mut grid = Grid::parse(&text).context("parsing map")?;
    let path = extract_loop(&mut grid).context("extracting loop")?;
    classify_interior(&mut grid, &path);
    let report = summarize(&grid, &path);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    print!("{}", render_enclosure(&grid));
    println!();
    println!("{report}");
    println!("analyzed in {elapsed_ms:.2} ms");

    if let Some(out_path) = &args.out {
        let census = CensusDto {
            rows: report.rows,
            cols: report.cols,
            total_tiles: report.total_tiles(),
            symbols: report
                .symbol_counts
                .iter()
                .map(|(shape, count)| SymbolCountDto {
                    symbol: shape.to_char(),
                    count: *count,
                })
                .collect(),
            loop_tiles: report.loop_tiles,
            farthest_distance: report.farthest_distance,
            interior_tiles: report.interior_tiles,
            exterior_tiles: report.exterior_tiles,
        };

        let out_file = std::fs::File::create(out_path)
            .with_context(|| format!("creating {out_path}"))?;
        serde_json::to_writer_pretty(out_file, &census)
            .with_context(|| format!("writing JSON to {out_path}"))?;
        println!("census written to {out_path}");
    }

    Ok(())
}
