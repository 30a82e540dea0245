//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CemlError, CemlResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up beside the model document
pub const PROJECT_CONFIG_FILE: &str = "ceml.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first mention, if found
    pub line: Option<usize>,
    /// Closest known key, if any is close enough
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CemlResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CemlError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// The first config file that exists wins; a malformed one is an error
/// rather than falling through to the next candidate.
pub fn load_or_default(model_dir: Option<&Path>) -> CemlResult<(Config, Vec<ConfigWarning>)> {
    let candidates = model_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("ceml").join("config.toml")));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&candidate)?;
        tracing::debug!(path = %candidate.display(), "configuration loaded");
        return Ok((with_env_overrides(config), warnings));
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (CEML_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub(crate) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(generator) = lookup("CEML_GENERATOR") {
        config.metadata.generator = generator;
    }

    if let Some(version) = lookup("CEML_SCHEMA_VERSION") {
        config.metadata.schema_version = version;
    }

    // Unknown metric names keep the configured one
    if let Some(metric) = lookup("CEML_COMPLIANCE_METRIC") {
        match metric.parse() {
            Ok(metric) => config.compliance.metric = metric,
            Err(message) => tracing::debug!(%message, "ignoring CEML_COMPLIANCE_METRIC"),
        }
    }

    if let Some(verbosity) = lookup("CEML_VERBOSITY") {
        config.output.verbosity = Verbosity::from_name(&verbosity);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "metadata",
        "generator",
        "schema_version",
        "compliance",
        "metric",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
