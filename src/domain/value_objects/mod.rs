//! Value Objects
//!
//! Immutable types with no identity: the closed vocabularies of the model,
//! raw dates, and the selectors that steer generation.

mod compliance_metric;
mod kinds;
mod model_date;
mod output_format;

pub use compliance_metric::ComplianceMetric;
pub use kinds::{ActorKind, CircularKind, Comparator, ComponentState, FacilityType, ProcessKind};
pub use model_date::{days_between, ModelDate, MILLIS_PER_DAY};
pub use output_format::OutputFormat;
