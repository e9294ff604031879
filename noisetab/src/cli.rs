//! Command-line argument parsing.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use noisetab_core::{SampleRange, TableSelection, TablesConfig};

/// Generate the gradient and cellular lookup tables used by the noise sampler.
#[derive(Parser, Debug)]
#[command(name = "noisetab")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// JSON5 config file; command-line flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the tables to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "literals")]
    pub format: OutputFormat,

    /// Emit only one of the tables
    #[arg(long, value_enum)]
    pub only: Option<TableKind>,

    /// Fractional digits per literal
    #[arg(long)]
    pub precision: Option<usize>,

    /// Number of gradient vectors
    #[arg(long)]
    pub gradient_count: Option<i64>,

    /// Gradient vectors per output line
    #[arg(long)]
    pub gradient_row_width: Option<i64>,

    /// Header label for the gradient table
    #[arg(long)]
    pub gradient_label: Option<String>,

    /// Number of random vectors
    #[arg(long)]
    pub cellular_count: Option<i64>,

    /// Random vectors per output line
    #[arg(long)]
    pub cellular_row_width: Option<i64>,

    /// Header label for the random table
    #[arg(long)]
    pub cellular_label: Option<String>,

    /// Inclusive lower bound of random components
    #[arg(long)]
    pub range_lo: Option<f64>,

    /// Inclusive upper bound of random components
    #[arg(long)]
    pub range_hi: Option<f64>,

    /// Seed for the random table; a fresh seed is drawn and logged when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// How the tables are written.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-precision literals for a native constant-array initializer
    Literals,
    /// Rust `static` array items
    Rust,
}

/// A single table.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Perlin gradient directions
    Gradient,
    /// Cellular random offsets
    Cellular,
}

impl Cli {
    /// Initialize logging based on verbosity. Logs go to stderr.
    pub fn init_logging(&self) {
        use tracing_subscriber::{EnvFilter, fmt};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    /// Which tables this run emits.
    pub const fn selection(&self) -> TableSelection {
        match self.only {
            None => TableSelection::Both,
            Some(TableKind::Gradient) => TableSelection::Gradient,
            Some(TableKind::Cellular) => TableSelection::Cellular,
        }
    }

    /// Applies command-line overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut TablesConfig) {
        if let Some(precision) = self.precision {
            config.precision = precision;
        }

        let gradient = &mut config.gradient;
        if let Some(count) = self.gradient_count {
            gradient.count = count;
        }
        if let Some(width) = self.gradient_row_width {
            gradient.row_width = width;
        }
        if let Some(label) = &self.gradient_label {
            gradient.label.clone_from(label);
        }

        let cellular = &mut config.cellular;
        if let Some(count) = self.cellular_count {
            cellular.count = count;
        }
        if let Some(width) = self.cellular_row_width {
            cellular.row_width = width;
        }
        if let Some(label) = &self.cellular_label {
            cellular.label.clone_from(label);
        }
        let SampleRange { lo, hi } = cellular.range;
        cellular.range = SampleRange::new(self.range_lo.unwrap_or(lo), self.range_hi.unwrap_or(hi));
        if self.seed.is_some() {
            cellular.seed = self.seed;
        }
    }
}
