//! Closed vocabularies of the circular-economy model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role an actor plays in the economy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorKind {
    Manufacturer,
    Retailer,
    Consumer,
}

impl ActorKind {
    pub const ALL: [ActorKind; 3] = [
        ActorKind::Manufacturer,
        ActorKind::Retailer,
        ActorKind::Consumer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Manufacturer => "MANUFACTURER",
            ActorKind::Retailer => "RETAILER",
            ActorKind::Consumer => "CONSUMER",
        }
    }

    /// Lower-case noun used in diagnostics ("retailer")
    pub fn noun(&self) -> &'static str {
        match self {
            ActorKind::Manufacturer => "manufacturer",
            ActorKind::Retailer => "retailer",
            ActorKind::Consumer => "consumer",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentState {
    Assembled,
    Ready,
    InCircularProcess,
}

impl ComponentState {
    pub const ALL: [ComponentState; 3] = [
        ComponentState::Assembled,
        ComponentState::Ready,
        ComponentState::InCircularProcess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentState::Assembled => "ASSEMBLED",
            ComponentState::Ready => "READY",
            ComponentState::InCircularProcess => "IN_CIRCULAR_PROCESS",
        }
    }
}

impl fmt::Display for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of circular treatment.
///
/// Facilities are typed by the treatment they offer and processes by the
/// treatment they perform, so both share this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CircularKind {
    Recycle,
    Repair,
    Refurbish,
}

/// Facility type (`RECYCLE` | `REPAIR` | `REFURBISH`)
pub type FacilityType = CircularKind;

/// Circular process kind (`RECYCLE` | `REPAIR` | `REFURBISH`)
pub type ProcessKind = CircularKind;

impl CircularKind {
    pub const ALL: [CircularKind; 3] = [
        CircularKind::Recycle,
        CircularKind::Repair,
        CircularKind::Refurbish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CircularKind::Recycle => "RECYCLE",
            CircularKind::Repair => "REPAIR",
            CircularKind::Refurbish => "REFURBISH",
        }
    }
}

impl fmt::Display for CircularKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a facility aggregate is compared against a goal's standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Comparator {
    /// Facility must meet or exceed the standard
    Min,
    /// Facility must stay at or below the standard
    Max,
}

impl Comparator {
    pub const ALL: [Comparator; 2] = [Comparator::Min, Comparator::Max];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Min => "MIN",
            Comparator::Max => "MAX",
        }
    }

    /// Whether `value` complies with `standard` under this comparator
    pub fn is_satisfied_by(&self, value: f64, standard: f64) -> bool {
        match self {
            Comparator::Min => value >= standard,
            Comparator::Max => value <= standard,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
