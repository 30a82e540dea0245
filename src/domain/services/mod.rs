//! Domain Services
//!
//! Pure logic over a resolved economy. No I/O; every service is a
//! deterministic function of its input.

pub mod grouping;
pub mod metrics;
pub mod numeric;

mod graph_projector;
mod report_assembler;

pub use graph_projector::GraphProjector;
pub use metrics::{MetricsAggregator, SustainabilityTotals};
pub use report_assembler::{GeneratorInfo, ReportAssembler};
