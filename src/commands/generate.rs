//! `ceml generate` entry point

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ceml::application::GenerateOptions;
use ceml::config::Config;
use ceml::domain::value_objects::OutputFormat;
use ceml::infrastructure::JsonEventSink;
use ceml::logging;
use ceml::presentation::create_generate_use_case;
use ceml::presentation::output::{print_config_warnings, GenerateResultRenderer, TextRenderer};

/// Generate command entry point
pub fn cmd_generate(
    file: &Path,
    destination: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let (config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(file.parent())?,
    };

    let verbosity = config.output.verbosity.raised(verbose);
    logging::init(verbosity);
    if !json {
        print_config_warnings(&warnings);
    }
    for warning in &warnings {
        tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown config key");
    }

    let use_case = create_generate_use_case(&config);
    let options = GenerateOptions::new(file, destination, format);

    if json {
        use_case.execute_with_events(&options, Arc::new(JsonEventSink::stdout()))?;
    } else {
        let result = use_case.execute(&options)?;
        TextRenderer::new(verbosity).render(&result);
    }

    Ok(())
}
