use super::EngineConfig;

/// Derive grid extents from a viewport size in pixels.
///
/// `rows = max(floor(height / cell_size), min_rows)` and likewise for
/// columns. A configured fixed size ignores the viewport entirely.
pub fn grid_dimensions(width: f32, height: f32, config: &EngineConfig) -> (usize, usize) {
    if let Some(size) = config.fixed_size {
        return size;
    }
    // `as usize` saturates: negative or NaN extents fall back to the minimum
    let fit = |extent: f32| (extent / config.cell_size).floor() as usize;
    (
        fit(height).max(config.min_rows),
        fit(width).max(config.min_cols),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_division_by_cell_size() {
        let config = EngineConfig::default();
        // 1000 / 15 = 66.6, 800 / 15 = 53.3
        assert_eq!(grid_dimensions(1000.0, 800.0, &config), (53, 66));
    }

    #[test]
    fn test_small_viewport_clamps_to_minimum() {
        let config = EngineConfig::default();
        assert_eq!(grid_dimensions(100.0, 0.0, &config), (20, 20));
        assert_eq!(grid_dimensions(-5.0, f32::NAN, &config), (20, 20));
    }

    #[test]
    fn test_fixed_size_wins() {
        let config = EngineConfig {
            fixed_size: Some((50, 100)),
            ..EngineConfig::default()
        };
        assert_eq!(grid_dimensions(3000.0, 2000.0, &config), (50, 100));
    }
}
