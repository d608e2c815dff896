use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pm_core::Grid;
use pm_interior::classify_interior;
use pm_report::{Report, render_enclosure, render_symbols, summarize};
use pm_trace::extract_loop;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pm_cli")]
#[command(about = "Analyze pipe-maze tile maps")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Debug logging (equivalent to RUST_LOG=debug)
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw symbol map
    Render(RenderArgs),
    /// Extract the loop and report its length
    Trace(TraceArgs),
    /// Full pipeline: loop, enclosure map, and tile census
    Classify(ClassifyArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Path to a tile map file
    #[arg(long, required = true)]
    map: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct TraceArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct ClassifyArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Write the census as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct SymbolCountDto {
    symbol: char,
    count: usize,
}

#[derive(Debug, Clone, Serialize)]
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

impl From<&Report> for CensusDto {
    fn from(report: &Report) -> Self {
        Self {
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
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Render(args) => run_render(args),
        Command::Trace(args) => run_trace(args),
        Command::Classify(args) => run_classify(args),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run_render(args: RenderArgs) -> Result<()> {
    let grid = load_grid(&args.common.map)?;
    print!("{}", render_symbols(&grid));
    Ok(())
}

fn run_trace(args: TraceArgs) -> Result<()> {
    let mut grid = load_grid(&args.common.map)?;
    let path = extract_loop(&mut grid)
        .with_context(|| format!("extracting loop from {}", args.common.map.display()))?;

    println!("loop tiles: {}", path.len());
    println!("farthest distance: {}", path.farthest_distance());
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let mut grid = load_grid(&args.common.map)?;
    let path = extract_loop(&mut grid)
        .with_context(|| format!("extracting loop from {}", args.common.map.display()))?;
    classify_interior(&mut grid, &path);
    let report = summarize(&grid, &path);

    print!("{}", render_enclosure(&grid));
    println!();
    println!("{report}");

    if let Some(json_path) = &args.json {
        write_json(json_path, &CensusDto::from(&report))?;
        println!("census written to {}", json_path.display());
    }

    Ok(())
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Grid::parse(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("writing JSON to {}", path.display()))?;
    Ok(())
}
