#![no_main]

use std::path::Path;

use ceml::infrastructure::{parse_economy, DocumentFormat};
use ceml::{GraphProjector, MetricsAggregator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Loading never panics; whatever loads can be measured and projected
        if let Ok(economy) = parse_economy(content, DocumentFormat::Yaml, Path::new("fuzz.yaml")) {
            let _ = MetricsAggregator::default().aggregate(&economy);
            let _ = GraphProjector::new().project(&economy);
        }
    }
});
