//! Lookup table generation for procedural noise.
//!
//! This crate produces the two static tables a 2D noise sampler embeds:
//!
//! - [`generate_gradients`] - unit gradient directions evenly spaced by angle (Perlin noise)
//! - [`generate_randoms`] - uniformly scattered feature-point offsets (cellular noise)
//!
//! [`TableEmitter`] writes either table as fixed-precision numeric literals
//! ready to be pasted into a constant-array initializer, and
//! [`TablePipeline`] validates, generates, and emits both in one run.

pub mod cellular;
#[cfg(feature = "codegen")]
pub mod codegen;
pub mod config;
pub mod emit;
pub mod error;
pub mod gradient;
pub mod pipeline;
mod table;

pub use cellular::{SampleRange, generate_randoms};
pub use config::{CellularConfig, GradientConfig, TablesConfig};
pub use emit::{LiteralFormat, TableEmitter};
pub use error::{ErrorKind, MAX_TABLE_LEN, TableError};
pub use gradient::generate_gradients;
pub use pipeline::{GeneratedTable, GeneratedTables, TablePipeline, TablePlan, TableSelection};
pub use table::{NamedTable, Vector2, VectorTable};
