//! Noise table generator - prints the Perlin gradient and cellular random
//! tables as embeddable constant data.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use noisetab_core::codegen::tables_module;
use noisetab_core::{GeneratedTables, TablePipeline, TablesConfig};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TablesConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let pipeline = TablePipeline::from_config(&config, cli.selection())
        .context("Invalid table configuration")?;

    let seed = resolve_seed(config.cellular.seed, pipeline.cellular().is_some());
    let mut rng = Pcg64::seed_from_u64(seed);

    let tables = pipeline
        .generate(&mut rng)
        .context("Failed to generate tables")?;
    let text = render(&tables, cli.format)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote tables");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write tables to stdout")?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<TablesConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json5::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Returns the configured seed, or draws a fresh one.
///
/// A drawn seed is logged at `warn` so it shows up under the default filter
/// and the run can be reproduced with `--seed`.
fn resolve_seed(configured: Option<u64>, cellular_selected: bool) -> u64 {
    configured.unwrap_or_else(|| {
        let seed = rand::random();
        if cellular_selected {
            tracing::warn!(seed, "No seed configured, drew a fresh one");
        }
        seed
    })
}

fn render(tables: &GeneratedTables, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Literals => tables.render(),
        OutputFormat::Rust => {
            let mut code = tables_module(tables)
                .context("Cannot emit tables as Rust items")?
                .to_string();
            code.push('\n');
            code
        }
    };
    Ok(text)
}
