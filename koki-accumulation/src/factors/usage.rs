use koki_core::config::AccumulationConfig;
use koki_core::models::AccumulationUsage;

/// Finishing duration for a usage.
///
/// Heavily partitioned buildings (residential, hotel) finish slower: 1.2×.
/// Bare industrial shells (factory, warehouse) finish faster: 0.8×.
/// Anything else: 1.0×.
///
/// Not divided by the coefficient; finishing is calendar-fixed.
pub fn finishing_duration(config: &AccumulationConfig, usage: AccumulationUsage) -> f64 {
    config.finishing_duration * config.finishing_multiplier(usage)
}
