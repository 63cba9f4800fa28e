//! voxlabel CLI - Label the connected components of an ASCII voxel volume
//!
//! Loads a volume of `'0'`/`'1'` bytes, optionally prints its neighbor
//! histogram, and times single-pass and/or boundary-first labeling.
//!
//! ```text
//! voxlabel volume.txt --dims 512 512 64 --mode both --neighbors
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxlabel::io::read_ascii_volume;
use voxlabel::region::{
    BoundaryFill, SplitOptions, boundary_first_label, count_components, label_volume,
    partitions_match,
};
use voxlabel::{Dims, Label, NeighborHistogram, Volume, neighbor_counts};

#[derive(Parser)]
#[command(name = "voxlabel")]
#[command(about = "Connected-component labeling of 3-D voxel volumes", long_about = None)]
#[command(version)]
struct Cli {
    /// ASCII volume file, x fastest-varying, no header
    input: PathBuf,

    /// Volume extents
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], required = true)]
    dims: Vec<usize>,

    /// Labeling strategy to run
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Splitting plane for boundary-first labeling (default: depth / 2)
    #[arg(long, value_name = "K")]
    plane: Option<usize>,

    /// Fill boundary components through the whole volume instead of the
    /// plane only
    #[arg(long)]
    volumetric_boundary: bool,

    /// Initial stack capacity for each boundary-first invocation
    #[arg(long, value_name = "N")]
    stack_capacity: Option<usize>,

    /// Print the 6-neighbor histogram of the source volume
    #[arg(long)]
    neighbors: bool,

    /// Print z-slice K of every label volume
    #[arg(long, value_name = "K")]
    print_slice: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Serial single-pass labeling
    Single,
    /// Boundary-first labeling with parallel halves
    Split,
    /// Both, followed by a partition comparison
    Both,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let &[x, y, z] = cli.dims.as_slice() else {
        bail!("--dims takes exactly three extents");
    };
    let dims = Dims::new(x, y, z);

    let source = read_ascii_volume(&cli.input, dims)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(path = %cli.input.display(), %dims, "volume loaded");

    if cli.neighbors {
        let hist = NeighborHistogram::from_counts(&neighbor_counts(&source));
        println!("{hist}");
    }

    let single = match cli.mode {
        Mode::Single | Mode::Both => Some(run_single(&source, cli)?),
        Mode::Split => None,
    };
    let split = match cli.mode {
        Mode::Split | Mode::Both => Some(run_split(&source, cli)?),
        Mode::Single => None,
    };

    if let (Some(single), Some(split)) = (&single, &split) {
        let same = partitions_match(single, split);
        println!("Partitions match: {}", if same { "yes" } else { "no" });
    }

    Ok(())
}

fn run_single(source: &Volume<u8>, cli: &Cli) -> Result<Volume<Label>> {
    let mut labels = source.to_labels();
    let start = Instant::now();
    let report = label_volume(&mut labels).context("single-pass labeling failed")?;
    let elapsed = start.elapsed();

    println!(
        "Single-pass: {} components in {:.3?}",
        report.components, elapsed
    );
    print_slice(&labels, cli)?;
    Ok(labels)
}

fn run_split(source: &Volume<u8>, cli: &Cli) -> Result<Volume<Label>> {
    let mut options = SplitOptions::new();
    if let Some(plane) = cli.plane {
        options = options.with_plane(plane);
    }
    if cli.volumetric_boundary {
        options = options.with_boundary(BoundaryFill::Volumetric);
    }
    if let Some(capacity) = cli.stack_capacity {
        options = options.with_stack_capacity(capacity);
    }

    let mut labels = source.to_labels();
    let start = Instant::now();
    let report = boundary_first_label(&mut labels, &options)
        .context("boundary-first labeling failed")?;
    let elapsed = start.elapsed();

    println!(
        "Boundary-first (plane {}): {} boundary, {} lower, {} upper components in {:.3?}",
        report.plane,
        report.boundary.components,
        report.lower.components,
        report.upper.components,
        elapsed
    );
    println!("Distinct labels: {}", count_components(&labels));
    print_slice(&labels, cli)?;
    Ok(labels)
}

fn print_slice(labels: &Volume<Label>, cli: &Cli) -> Result<()> {
    if let Some(k) = cli.print_slice {
        let text = labels
            .format_z_slice(k)
            .with_context(|| format!("cannot print slice {k}"))?;
        print!("{text}");
    }
    Ok(())
}
