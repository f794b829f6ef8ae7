use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use darktheme::models::{RunConfig, SUFFIX_ENV};
use darktheme::services::{discover_inputs, ThemeConverter};
use halo_remap::{Argb, ReferencePair};

#[derive(Parser, Debug)]
#[command(name = "darktheme")]
#[command(about = "Create dark-theme variants of images by remapping luminosity")]
#[command(version)]
struct Cli {
    /// Light reference color as hex RGB (e.g. "CCCCCC"); becomes the dark target
    light: Argb,

    /// Dark target color as hex RGB (e.g. "202020")
    dark: Argb,

    /// Image files or directories (directories are walked recursively)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Suffix appended to output file stems [default: $DARKTHEME_SUFFIX or "_dark"]
    #[arg(short, long, allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Re-compress output PNGs with oxipng (lossless, slower)
    #[arg(long)]
    optimize: bool,

    /// Remap pixels on a single thread
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn into_config(self, env_suffix: Option<String>) -> anyhow::Result<(RunConfig, Vec<PathBuf>)> {
        let suffix = RunConfig::resolve_suffix(self.suffix, env_suffix)?;
        let config = RunConfig {
            references: ReferencePair::new(self.light, self.dark),
            suffix,
            optimize: self.optimize,
            parallel: !self.sequential,
        };
        Ok((config, self.paths))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darktheme=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let (config, paths) = cli.into_config(std::env::var(SUFFIX_ENV).ok())?;
    run(&config, &paths)
}

/// Convert every discovered input; fail if anything was missing or failed.
fn run(config: &RunConfig, paths: &[PathBuf]) -> anyhow::Result<()> {
    let discovery = discover_inputs(paths, &config.suffix);
    if discovery.is_empty() && discovery.missing.is_empty() {
        tracing::warn!("No input files found");
    }

    let converter = ThemeConverter::new(config);
    let report = converter.convert_all(&discovery.files);

    println!(
        "Converted {} of {} files",
        report.converted.len(),
        discovery.files.len()
    );
    if !discovery.skipped.is_empty() {
        println!(
            "Skipped {} previous outputs ending in {:?}",
            discovery.skipped.len(),
            config.suffix
        );
    }
    if !discovery.ignored.is_empty() {
        println!(
            "Ignored {} files without an image extension",
            discovery.ignored.len()
        );
    }
    for (input, e) in &report.failed {
        eprintln!("  ! {}: {e}", input.display());
    }
    for path in &discovery.missing {
        eprintln!("  ? {}: not found", path.display());
    }

    if !report.is_success() || !discovery.missing.is_empty() {
        anyhow::bail!(
            "{} failed, {} not found",
            report.failed.len(),
            discovery.missing.len()
        );
    }

    Ok(())
}
