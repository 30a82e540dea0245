#![no_main]

use std::path::Path;

use ceml::infrastructure::{parse_economy, DocumentFormat};
use ceml::MetricsAggregator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(economy) = parse_economy(content, DocumentFormat::Json, Path::new("fuzz.json")) {
            let metrics = MetricsAggregator::default().aggregate(&economy);
            assert!(serde_json::to_string(&metrics).is_ok());
        }
    }
});
