//! Domain Layer
//!
//! The core of CEML - pure logic over a resolved model, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The model (Economy) and what is derived from it (Metrics, Graph, Report)
//! - `value_objects/` - Closed vocabularies, raw dates, format selectors
//! - `services/` - Metrics aggregator, graph projector, report assembler
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are deterministic over `&Economy`
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
