//! vue-types-gen CLI tool.
//!
//! Usage:
//! ```bash
//! vue-types-gen ./eslint-plugin-vue -o types/vue-rules.d.ts
//! vue-types-gen ./eslint-plugin-vue --format json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vue_types_core::{generate, Analyzer};

mod output;

/// Generate TypeScript declarations for eslint-plugin-vue rule options
#[derive(Parser)]
#[command(name = "vue-types-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the eslint-plugin-vue checkout
    input: PathBuf,

    /// Output path for the generated file (use "-" for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Output format
    #[arg(short, long, default_value = "dts")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for the analysis result.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    /// TypeScript declaration file.
    #[default]
    Dts,
    /// The raw analysis as pretty-printed JSON.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Analyzing plugin at {}", cli.input.display());

    let analysis = Analyzer::builder(&cli.input)
        .build()
        .analyze()
        .context("Analysis failed")?;

    for warning in &analysis.warnings {
        tracing::warn!("{}: {}", warning.path.display(), warning.message);
    }

    tracing::info!(
        "Found {} rules ({} with options)",
        analysis.total_rules,
        analysis.rules_with_options
    );

    let content = match cli.format {
        OutputFormat::Dts => generate(&analysis).context("Generation failed")?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&analysis)
                .context("Failed to serialize analysis")?;
            json.push('\n');
            json
        }
    };

    output::write(&content, &cli.output)?;

    if cli.output != "-" {
        tracing::info!("Written to {}", cli.output);
    }

    Ok(())
}
