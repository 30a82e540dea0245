#![no_main]

use ceml::domain::value_objects::ModelDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let date = ModelDate::new(raw);
        // Unparsable dates are excluded, never a panic
        let _ = date.parse();
        let _ = date.year_key();
        let _ = date.days_until(&ModelDate::new("2024-01-01"));
    }
});
