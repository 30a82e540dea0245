//! Generate Use Case
//!
//! Orchestrates the generate flow:
//! 1. Select the generator for the requested format
//! 2. Load and resolve the model
//! 3. Render the artifact
//! 4. Write it to the destination
//!
//! The generator is selected first so an unimplemented format fails before
//! any file is read.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    FileSystem, GenerateEvent, GenerateEventSink, ModelLoader, NoopEventSink,
};
use crate::error::CemlResult;
use crate::infrastructure::GeneratorRegistry;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case - parameterized by its ports
pub struct GenerateUseCase<L, F>
where
    L: ModelLoader,
    F: FileSystem,
{
    loader: L,
    file_system: F,
    registry: GeneratorRegistry,
}

impl<L, F> GenerateUseCase<L, F>
where
    L: ModelLoader,
    F: FileSystem,
{
    pub fn new(loader: L, file_system: F, registry: GeneratorRegistry) -> Self {
        Self {
            loader,
            file_system,
            registry,
        }
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> CemlResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the generate use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: Arc<dyn GenerateEventSink>,
    ) -> CemlResult<GenerateResult> {
        let generator = self.registry.get(options.format)?;

        events.on_event(GenerateEvent::Started {
            source: options.source.clone(),
            destination: options.destination.clone(),
            format: options.format,
        });
        tracing::info!(
            source = %options.source.display(),
            format = %options.format,
            "generating"
        );

        let economy = self.loader.load(&options.source)?;
        events.on_event(GenerateEvent::ModelLoaded {
            economy_name: economy.name().to_string(),
            entity_count: economy.entity_count(),
        });

        let text = generator.generate(&economy)?;
        events.on_event(GenerateEvent::Generated {
            format: options.format,
            bytes: text.len(),
        });

        self.write_artifact(&options.destination, &text)?;
        events.on_event(GenerateEvent::Written {
            destination: options.destination.clone(),
            bytes: text.len(),
        });
        tracing::info!(
            destination = %options.destination.display(),
            bytes = text.len(),
            "artifact written"
        );

        Ok(GenerateResult {
            destination: options.destination.clone(),
            format: options.format,
            bytes_written: text.len(),
            entity_count: economy.entity_count(),
        })
    }

    fn write_artifact(&self, destination: &Path, text: &str) -> CemlResult<()> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.file_system.create_dir_all(parent)?;
        }
        self.file_system.write(destination, text)?;
        Ok(())
    }
}
