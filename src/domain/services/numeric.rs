//! Rounding and zero-guarded ratios shared by the aggregation groups

/// Decimals for return rates and per-group averages
pub const RATE_DECIMALS: u32 = 2;
/// Decimals for the delivered-shipment ratio
pub const DELIVERED_RATIO_DECIMALS: u32 = 4;
/// Decimals for day-gap averages
pub const DAYS_AVG_DECIMALS: u32 = 1;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `numerator / denominator` rounded, or `0.0` for an empty denominator
pub fn ratio(numerator: usize, denominator: usize, decimals: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator as f64 / denominator as f64, decimals)
}

/// Mean of `total` over `count` items; `0.0` when there are none
pub fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total / count as f64
}

/// [`average`] rounded to `decimals`
pub fn mean(total: f64, count: usize, decimals: u32) -> f64 {
    round_to(average(total, count), decimals)
}
