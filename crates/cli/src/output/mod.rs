//! Output formatting for CLI

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod formatters;
mod table;
mod views;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Types that can be printed in every output format
pub trait Formattable: Serialize {
    /// Format as JSON
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    /// Format as table
    fn format_table(&self) -> Result<String>;

    /// Format as plain text
    fn format_plain(&self) -> Result<String> {
        PlainFormatter::format(self)
    }

    /// Format using the specified format
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Table => self.format_table(),
            OutputFormat::Plain => self.format_plain(),
        }
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    /// Green
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Yellow
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Bold
    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
    }

    #[test]
    fn test_output_format_serialization() {
        let serialized = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(serialized, "\"json\"");

        let deserialized: OutputFormat = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(deserialized, OutputFormat::Table);
    }
}
