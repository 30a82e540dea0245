//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod file_system;
pub mod generate_events;
pub mod generator;
pub mod model_loader;

pub use clock::{Clock, FixedClock, SystemClock};
pub use file_system::{FileSystem, FsError, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use generator::{Generator, GeneratorError};
pub use model_loader::ModelLoader;
