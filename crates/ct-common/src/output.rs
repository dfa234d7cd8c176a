//! Output format specifications for result sinks.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Rendering backend for the ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain listing on stdout.
    Console,
    /// Templated HTML document.
    Html,
    /// Delimited file.
    Csv,
}

impl OutputFormat {
    /// True when the format writes to an output file path.
    pub fn writes_file(self) -> bool {
        !matches!(self, OutputFormat::Console)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Console => "console",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_is_the_only_streamed_format() {
        assert!(!OutputFormat::Console.writes_file());
        assert!(OutputFormat::Html.writes_file());
        assert!(OutputFormat::Csv.writes_file());
    }
}
