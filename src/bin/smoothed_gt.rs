//! Command-line driver: histogram file in, accumulation curve table out
//!
//! ```text
//! smoothed-gt <SAMPLE_SIZE> <MAX_SCALE> <SMOOTHING_SAMPLES> <STEP> \
//!     [--histogram prevalences.tsv] [--output accumulation_curve.tsv] [--seed N]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unseen_stats::unseen_curve::{read_histogram, write_curve_file};
use unseen_stats::{accumulation_curve, CurveConfig};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Species accumulation curve from the smoothed Good-Toulmin estimator",
    long_about = None
)]
struct Args {
    /// Size n of the observed sample
    #[arg(required_unless_present = "config")]
    sample_size: Option<u64>,

    /// Exclusive upper bound of the scale factor grid
    #[arg(required_unless_present = "config")]
    max_scale: Option<f64>,

    /// Truncation draws averaged per extrapolated point
    #[arg(required_unless_present = "config")]
    smoothing_samples: Option<usize>,

    /// Spacing of the scale factor grid
    #[arg(required_unless_present = "config")]
    step: Option<f64>,

    /// Whitespace-delimited frequency-of-frequencies histogram
    #[arg(long, default_value = "prevalences.tsv")]
    histogram: PathBuf,

    /// Where to write the curve table
    #[arg(long, short = 'o', default_value = "accumulation_curve.tsv")]
    output: PathBuf,

    /// Seed for a reproducible curve
    #[arg(long)]
    seed: Option<u64>,

    /// Write a header row
    #[arg(long)]
    header: bool,

    /// Column delimiter (tab by default)
    #[arg(long)]
    delimiter: Option<char>,

    /// JSON run configuration; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_config(args: &Args) -> Result<CurveConfig> {
    let mut config = match &args.config {
        Some(path) => CurveConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => CurveConfig::new(
            args.sample_size.context("missing sample size")?,
            args.max_scale.context("missing maximum scale")?,
        ),
    };

    if let Some(sample_size) = args.sample_size {
        config.sample_size = sample_size;
    }
    if let Some(max_scale) = args.max_scale {
        config.max_scale = max_scale;
    }
    if let Some(smoothing_samples) = args.smoothing_samples {
        config.smoothing_samples = smoothing_samples;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.header {
        config.output.header = true;
    }
    if let Some(delimiter) = args.delimiter {
        config.output.delimiter = delimiter;
    }

    config.validate().context("invalid run configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(?config, "resolved configuration");

    let histogram = read_histogram(&args.histogram)
        .with_context(|| format!("failed to load histogram {}", args.histogram.display()))?;

    let curve = accumulation_curve(&histogram, &config).context("failed to build curve")?;

    write_curve_file(&args.output, &curve, &config.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Accumulation curve generated: {} points written to {}",
        curve.len(),
        args.output.display()
    );
    Ok(())
}
