//! Charge level to fill color mapping.

use voltic_proto::{BatteryIconConfig, Color};

const FULL_BATTERY: f32 = 100.0;

/// Selects the fill color for a raw charge level.
///
/// `pct = clamp(round(level * 100), 0, 100)`; percentages at or below
/// `low_threshold` map to the low color, those at or above
/// `gradient_threshold` to the high color, and the gap in between (only
/// reachable when `gradient_threshold > low_threshold + 1`) to the no-level
/// color. Branch order and inclusive bounds are deliberate: when the ranges
/// overlap, the low color wins.
pub fn level_color(level: f32, config: &BatteryIconConfig) -> Color {
    let pct = (level * FULL_BATTERY).round().clamp(0.0, FULL_BATTERY) as u8;
    let low_threshold = config.low_threshold.min(100);
    let gradient_threshold = config.gradient_threshold.min(100);

    if pct <= low_threshold {
        config.palette.low_level
    } else if pct >= gradient_threshold {
        config.palette.high_level
    } else {
        config.palette.no_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(low: u8, gradient: u8) -> BatteryIconConfig {
        BatteryIconConfig {
            low_threshold: low,
            gradient_threshold: gradient,
            ..Default::default()
        }
    }

    #[test]
    fn empty_battery_is_low() {
        let config = config(17, 0);
        assert_eq!(level_color(0.0, &config), config.palette.low_level);
    }

    #[test]
    fn full_battery_is_high() {
        let config = config(17, 0);
        assert_eq!(level_color(1.0, &config), config.palette.high_level);
    }

    #[test]
    fn low_threshold_is_inclusive() {
        let config = config(17, 0);
        assert_eq!(level_color(0.17, &config), config.palette.low_level);
        assert_eq!(level_color(0.18, &config), config.palette.high_level);
    }

    #[test]
    fn gap_between_thresholds_maps_to_no_level() {
        let config = config(20, 40);
        assert_eq!(level_color(0.21, &config), config.palette.no_level);
        assert_eq!(level_color(0.39, &config), config.palette.no_level);
        assert_eq!(level_color(0.40, &config), config.palette.high_level);
    }

    #[test]
    fn overlapping_thresholds_prefer_low() {
        let config = config(30, 10);
        assert_eq!(level_color(0.20, &config), config.palette.low_level);
        assert_eq!(level_color(0.31, &config), config.palette.high_level);
    }

    #[test]
    fn out_of_range_levels_clamp() {
        let config = config(17, 0);
        assert_eq!(level_color(-5.0, &config), config.palette.low_level);
        assert_eq!(level_color(5.0, &config), config.palette.high_level);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let config = config(17, 0);
        // 0.174 rounds to 17 (low), 0.176 rounds to 18 (high).
        assert_eq!(level_color(0.174, &config), config.palette.low_level);
        assert_eq!(level_color(0.176, &config), config.palette.high_level);
    }

    #[test]
    fn overlarge_thresholds_are_clamped_to_full() {
        let config = config(255, 0);
        assert_eq!(level_color(1.0, &config), config.palette.low_level);
    }
}
