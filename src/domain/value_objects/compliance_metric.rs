//! ComplianceMetric - which facility aggregate a sustainability goal is judged on

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Facility aggregate compared against a goal's `standard`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceMetric {
    /// Energy saved by the facility's processes (kWh)
    #[default]
    Energy,
    /// Water saved by the facility's processes (L)
    Water,
    /// CO2 emitted by the shipments of the facility's processes
    Co2,
}

impl ComplianceMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceMetric::Energy => "energy",
            ComplianceMetric::Water => "water",
            ComplianceMetric::Co2 => "co2",
        }
    }
}

impl fmt::Display for ComplianceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "energy" | "energy-saved" => Ok(ComplianceMetric::Energy),
            "water" | "water-saved" => Ok(ComplianceMetric::Water),
            "co2" | "co2-emission" => Ok(ComplianceMetric::Co2),
            other => Err(format!("unknown compliance metric '{other}'")),
        }
    }
}
