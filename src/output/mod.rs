//! Output formatting module
//!
//! Renders API results as table, CSV, JSON or YAML. Table and CSV work on
//! [`Record`]s: curated columns for the common resource shapes, every
//! serialized field for everything else. JSON and YAML always show the full
//! object.

mod common;
mod csv;
mod json;
mod record;
mod table;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::csv::render_csv;
pub use self::json::{render_json, render_yaml};
pub(crate) use self::record::renderable_item;
pub use self::record::{display_value, Record, Renderable, ToRecord};
pub use self::table::render_table;

/// Renders results in the format chosen for this invocation
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    no_headers: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat, no_headers: bool) -> Self {
        Self { format, no_headers }
    }

    /// Build from a format name; unknown names are a configuration error
    pub fn from_name(name: &str, no_headers: bool) -> Result<Self> {
        Ok(Self::new(name.parse()?, no_headers))
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write `data` to `out`
    pub fn render<R: Renderable + ?Sized>(&self, data: &R, out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Json => render_json(data, out),
            OutputFormat::Yaml => render_yaml(data, out),
            OutputFormat::Table => render_table(&data.records()?, self.no_headers, out),
            OutputFormat::Csv => render_csv(&data.records()?, self.no_headers, out),
        }
    }

    /// Write `data` to stdout
    pub fn print<R: Renderable + ?Sized>(&self, data: &R) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render(data, &mut lock)?;
        lock.flush()?;
        Ok(())
    }
}
