//! Output Rendering
//!
//! Human-readable rendering of generate results. Under `--json` the NDJSON
//! event sink reports progress instead and nothing here is printed.

use crate::application::GenerateResult;
use crate::config::{ConfigWarning, Verbosity};

/// Trait for rendering generate results
pub trait GenerateResultRenderer {
    fn render(&self, result: &GenerateResult);
}

/// Text renderer for generate results
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub verbosity: Verbosity,
}

impl TextRenderer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Lines printed for `result`
    pub fn lines(&self, result: &GenerateResult) -> Vec<String> {
        if self.verbosity == Verbosity::Quiet {
            return Vec::new();
        }

        let mut lines = vec![format!(
            "Code generated successfully: {}",
            result.destination.display()
        )];
        if self.verbosity >= Verbosity::Verbose {
            lines.push(format!(
                "  {} entities → {} ({} bytes)",
                result.entity_count, result.format, result.bytes_written
            ));
        }
        lines
    }
}

impl GenerateResultRenderer for TextRenderer {
    fn render(&self, result: &GenerateResult) {
        for line in self.lines(result) {
            println!("{line}");
        }
    }
}

/// Lines describing unknown configuration keys
pub fn config_warning_lines(warnings: &[ConfigWarning]) -> Vec<String> {
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "warning: unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )),
            None => lines.push(format!(
                "warning: unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}

/// Print configuration warnings to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for line in config_warning_lines(warnings) {
        eprintln!("{line}");
    }
}
