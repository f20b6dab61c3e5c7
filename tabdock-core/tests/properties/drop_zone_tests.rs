//! Property-based tests for drop zone classification

use proptest::prelude::*;
use tabdock_core::drag_drop::{DropZone, DropZoneConfig, ZoneClassifier, classify_drop_zone};

/// Strategy for generating classifier configurations
fn config_strategy() -> impl Strategy<Value = DropZoneConfig> {
    (0.05..0.45f64).prop_map(|edge_ratio| DropZoneConfig { edge_ratio })
}

/// Strategy for generating rectangle sizes
fn size_strategy() -> impl Strategy<Value = (f64, f64)> {
    (10.0..2000.0f64, 10.0..2000.0f64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Points in the left band are always Left, whatever their height.
    #[test]
    fn prop_left_band_wins(
        (width, height) in size_strategy(),
        config in config_strategy(),
        fx in 0.0..1.0f64,
        fy in 0.0..=1.0f64,
    ) {
        let x = fx * width * config.edge_ratio;
        let y = fy * height;
        prop_assert_eq!(classify_drop_zone(x, y, width, height, &config), DropZone::Left);
    }

    /// Points away from every edge band are Center.
    #[test]
    fn prop_middle_is_center(
        (width, height) in size_strategy(),
        config in config_strategy(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let inner = 1.0 - 2.0 * config.edge_ratio;
        let margin = 0.01;
        let x = width * (config.edge_ratio + margin + fx * (inner - 2.0 * margin));
        let y = height * (config.edge_ratio + margin + fy * (inner - 2.0 * margin));
        prop_assert_eq!(classify_drop_zone(x, y, width, height, &config), DropZone::Center);
    }

    /// Vertical bands only apply between the horizontal bands.
    #[test]
    fn prop_top_and_bottom_bands(
        (width, height) in size_strategy(),
        config in config_strategy(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let margin = 0.01;
        let x = width * (config.edge_ratio + margin + fx * (1.0 - 2.0 * config.edge_ratio - 2.0 * margin));
        let top_y = fy * height * config.edge_ratio;
        let bottom_y = height - fy * height * config.edge_ratio;
        prop_assert_eq!(classify_drop_zone(x, top_y, width, height, &config), DropZone::Top);
        prop_assert_eq!(classify_drop_zone(x, bottom_y, width, height, &config), DropZone::Bottom);
    }

    /// Points outside the rectangle are Center.
    #[test]
    fn prop_outside_is_center(
        (width, height) in size_strategy(),
        config in config_strategy(),
        offset in 0.001..500.0f64,
        side in 0usize..4,
    ) {
        let (x, y) = match side {
            0 => (-offset, height / 2.0),
            1 => (width + offset, height / 2.0),
            2 => (width / 2.0, -offset),
            _ => (width / 2.0, height + offset),
        };
        prop_assert_eq!(config.classify(x, y, width, height), DropZone::Center);
    }

    /// Zone names round-trip and unknown names fall back to Center.
    #[test]
    fn prop_from_side_total(name in "[a-z]{0,8}") {
        let zone = DropZone::from_side(&name);
        match name.parse::<DropZone>() {
            Ok(parsed) => prop_assert_eq!(zone, parsed),
            Err(()) => prop_assert_eq!(zone, DropZone::Center),
        }
        prop_assert_eq!(DropZone::from_side(zone.as_str()), zone);
    }
}
