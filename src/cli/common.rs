//! Common CLI types shared across commands

use std::fmt;
use std::str::FromStr;

use indicatif::ProgressBar;

use crate::error::SpaceError;
use crate::output::Formatter;
use crate::ui::create_spinner;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-aligned table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
    /// YAML format
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(SpaceError::Config(format!("unsupported format: {}", s))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Per-invocation settings derived once from the global flags
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub formatter: Formatter,
    pub quiet: bool,
}

impl RunContext {
    pub fn new(formatter: Formatter, quiet: bool) -> Self {
        Self { formatter, quiet }
    }

    /// Print a confirmation line unless `--quiet`
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Spinner on stderr, only for interactive table output
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        let hidden = self.quiet || self.formatter.format() != OutputFormat::Table;
        create_spinner(message, hidden)
    }
}
