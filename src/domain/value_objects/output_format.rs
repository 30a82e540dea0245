//! OutputFormat value object - which artifact `generate` produces

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CemlError;

/// Output format selector for the `generate` command
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Metadata, metrics and graph as pretty-printed JSON
    Json,
    /// Relational schema followed by insert statements
    Sql,
    /// Relational schema only
    SqlSchema,
    /// Insert statements only
    SqlInsert,
    /// PlantUML object diagram
    Plantuml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Json,
        OutputFormat::Sql,
        OutputFormat::SqlSchema,
        OutputFormat::SqlInsert,
        OutputFormat::Plantuml,
    ];

    /// Name used on the command line and in events
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Sql => "sql",
            OutputFormat::SqlSchema => "sql-schema",
            OutputFormat::SqlInsert => "sql-insert",
            OutputFormat::Plantuml => "plantuml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CemlError;

    /// Case-insensitive parse; anything outside the supported set is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| CemlError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}
