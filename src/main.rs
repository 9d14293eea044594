//! Contrast Engine - command line front end.
//!
//! Logs go to stderr so JSON output on stdout stays machine readable.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contrast_engine::storage::config::{load_config, load_config_from};
use contrast_engine::{ContrastCalculator, Palette, TextHierarchy, WcagLevel};

#[derive(Parser, Debug)]
#[command(name = "contrast-engine", version, about = "WCAG 2.1 contrast checks for theme palettes")]
struct Args {
    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the contrast ratio between two colors
    Ratio {
        /// First color (#RGB or #RRGGBB)
        a: String,
        /// Second color (#RGB or #RRGGBB)
        b: String,
        /// Fail instead of reporting 1:1 for malformed colors
        #[arg(long)]
        strict: bool,
    },
    /// Pick the best text color for a background
    TextColor {
        /// Background color (#RGB or #RRGGBB)
        background: String,
        /// title-primary, title-secondary, body or muted
        #[arg(long, default_value = "body")]
        hierarchy: String,
    },
    /// Validate a palette file (JSON or TOML map of role -> {hex})
    Validate {
        palette: PathBuf,
    },
}

fn read_palette(path: &Path) -> anyhow::Result<Palette> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading palette {}", path.display()))?;

    let palette = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("parsing TOML palette {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON palette {}", path.display()))?,
    };

    Ok(palette)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("loading configuration")?;

    let calculator = ContrastCalculator::with_config(&config);

    match args.command {
        Command::Ratio { a, b, strict } => {
            let ratio = if strict {
                calculator.try_contrast_ratio(&a, &b)?
            } else {
                calculator.contrast_ratio(&a, &b)
            };
            println!("{:.2}:1 {}", ratio, WcagLevel::for_ratio(ratio));
        }
        Command::TextColor {
            background,
            hierarchy,
        } => {
            let hierarchy = TextHierarchy::from(hierarchy.as_str());
            let result = calculator.optimal_text_color(&background, hierarchy);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Validate { palette } => {
            let palette = read_palette(&palette)?;
            let report = calculator.validate_accessibility(&palette);
            println!("{}", serde_json::to_string_pretty(&report)?);

            let stats = calculator.cache_stats();
            tracing::debug!(
                "Cache: {}/{} entries ({:.1}%), {} hits, {} misses",
                stats.size,
                stats.max_size,
                stats.utilization_pct,
                stats.hits,
                stats.misses
            );
        }
    }

    Ok(())
}
