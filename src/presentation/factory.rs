//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::GenerateUseCase;
use crate::config::Config;
use crate::infrastructure::{FsModelLoader, GeneratorRegistry, LocalFs};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<FsModelLoader<LocalFs>, LocalFs>;

/// Create a generate use case with all dependencies wired up
///
/// Report metadata and the compliance metric come from `config`.
pub fn create_generate_use_case(config: &Config) -> ConcreteGenerateUseCase {
    create_generate_use_case_with_registry(GeneratorRegistry::with_defaults(
        config.generator_info(),
        config.metrics_aggregator(),
    ))
}

/// Create a generate use case with a specific generator registry
pub fn create_generate_use_case_with_registry(
    registry: GeneratorRegistry,
) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(FsModelLoader::new(LocalFs::new()), LocalFs::new(), registry)
}
