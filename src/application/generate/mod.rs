//! Generate Module
//!
//! Orchestrates one `generate` run.
//!
//! ## Structure
//!
//! - `options` - Input of a run (`GenerateOptions`)
//! - `result` - Outcome of a run (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ceml::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(loader, fs, registry);
//! let result = use_case.execute(&GenerateOptions::new(source, destination, format))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
