//! Validated generation and emission of both noise tables.
//!
//! A [`TablePipeline`] is built from a [`TablesConfig`] and checks every
//! setting up front. Generation and emission only happen once the whole
//! plan is known to be valid, so a bad setting never leaves a partially
//! written table behind.

use std::fmt::{self, Write};

use rand::Rng;

use crate::cellular::{SampleRange, generate_randoms};
use crate::config::TablesConfig;
use crate::emit::{LiteralFormat, TableEmitter};
use crate::error::{TableError, checked_count};
use crate::gradient::generate_gradients;
use crate::table::{NamedTable, VectorTable};

/// Which tables a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableSelection {
    /// Gradients followed by cellular randoms.
    #[default]
    Both,
    /// Only the gradient table.
    Gradient,
    /// Only the cellular random table.
    Cellular,
}

impl TableSelection {
    const fn gradient(self) -> bool {
        matches!(self, Self::Both | Self::Gradient)
    }

    const fn cellular(self) -> bool {
        matches!(self, Self::Both | Self::Cellular)
    }
}

/// A validated plan for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlan {
    /// Header text.
    pub label: String,
    /// Number of vectors.
    pub count: usize,
    /// Emission layout.
    pub format: LiteralFormat,
}

/// Validated settings for a full generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePipeline {
    gradient: Option<TablePlan>,
    cellular: Option<(TablePlan, SampleRange)>,
}

impl TablePipeline {
    /// Validates `config` for the selected tables.
    ///
    /// Settings of tables that are not selected are ignored.
    pub fn from_config(config: &TablesConfig, selection: TableSelection) -> Result<Self, TableError> {
        let gradient = if selection.gradient() {
            let g = &config.gradient;
            Some(TablePlan {
                label: g.label.clone(),
                count: checked_count(g.count)?,
                format: LiteralFormat::new(
                    config.precision,
                    LiteralFormat::row_width_from(g.row_width)?,
                )?,
            })
        } else {
            None
        };

        let cellular = if selection.cellular() {
            let c = &config.cellular;
            let plan = TablePlan {
                label: c.label.clone(),
                count: checked_count(c.count)?,
                format: LiteralFormat::new(
                    config.precision,
                    LiteralFormat::row_width_from(c.row_width)?,
                )?,
            };
            Some((plan, c.range.validate()?))
        } else {
            None
        };

        Ok(Self { gradient, cellular })
    }

    /// The gradient plan, if selected.
    #[must_use]
    pub const fn gradient(&self) -> Option<&TablePlan> {
        self.gradient.as_ref()
    }

    /// The cellular plan and its sampling range, if selected.
    #[must_use]
    pub const fn cellular(&self) -> Option<&(TablePlan, SampleRange)> {
        self.cellular.as_ref()
    }

    /// Generates every selected table, drawing random offsets from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedTables, TableError> {
        let mut tables = Vec::with_capacity(2);

        if let Some(plan) = &self.gradient {
            tables.push(GeneratedTable {
                plan: plan.clone(),
                table: generate_gradients(plan.count)?,
            });
        }
        if let Some((plan, range)) = &self.cellular {
            tables.push(GeneratedTable {
                plan: plan.clone(),
                table: generate_randoms(plan.count, *range, rng)?,
            });
        }

        Ok(GeneratedTables { tables })
    }
}

/// A generated table with the plan it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTable {
    /// The validated plan.
    pub plan: TablePlan,
    /// The generated data.
    pub table: VectorTable,
}

impl GeneratedTable {
    /// Borrows the table together with its label.
    #[must_use]
    pub fn named(&self) -> NamedTable<'_> {
        NamedTable::new(&self.plan.label, &self.table)
    }
}

/// The output of one pipeline run, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTables {
    tables: Vec<GeneratedTable>,
}

impl GeneratedTables {
    /// Tables in emission order.
    #[must_use]
    pub fn tables(&self) -> &[GeneratedTable] {
        &self.tables
    }

    /// Emits every table as fixed-precision literals.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        for generated in &self.tables {
            TableEmitter::new(generated.plan.format).emit(generated.named(), out)?;
        }
        Ok(())
    }

    /// Emits every table into a new string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out)
            .expect("writing to a String cannot fail");
        out
    }
}
