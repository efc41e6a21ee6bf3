//! Geometry clamping
//!
//! Any geometry the manager computes is forced into the nearest valid
//! rectangle instead of being rejected: at least the minimum size, no larger
//! than the usable area, non-negative, and with enough of the title bar on
//! the surface to grab it again.

use crate::config::WmConfig;
use crate::math::{Point, Rect};

/// Clamp a size dimension to `[floor, max(limit, floor)]`.
#[inline]
fn clamp_dim(value: f64, floor: f64, limit: f64) -> f64 {
    value.max(floor).min(limit.max(floor))
}

/// Clamp only the position of `rect` so its title bar stays reachable.
pub fn clamp_position(rect: Rect, area: Rect, config: &WmConfig) -> Rect {
    let visible = config.handle_min_visible.min(rect.width);
    let max_left = (area.right() - visible).max(area.left);
    let max_top = (area.bottom() - config.title_bar_height).max(area.top);

    Rect::new(
        rect.top.clamp(area.top, max_top),
        rect.left.clamp(area.left, max_left),
        rect.width,
        rect.height,
    )
}

/// Clamp size then position.
pub fn clamp_to_area(rect: Rect, area: Rect, config: &WmConfig) -> Rect {
    let min = config.min_window_size;
    let sized = Rect::new(
        rect.top,
        rect.left,
        clamp_dim(rect.width, min.width, area.width),
        clamp_dim(rect.height, min.height, area.height),
    );
    clamp_position(sized, area, config)
}

/// Translate `start` by `delta`, keeping the title bar on the surface.
pub fn calculate_move(start: Rect, delta: Point, area: Rect, config: &WmConfig) -> Rect {
    clamp_position(start.translate(delta), area, config)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Clamped geometry is never below the floor and never negative
        #[test]
        fn clamp_respects_floor_and_origin(
            top in -5000.0f64..5000.0,
            left in -5000.0f64..5000.0,
            width in 0.0f64..5000.0,
            height in 0.0f64..5000.0,
            vw in 0.0f64..4000.0,
            vh in 0.0f64..3000.0,
        ) {
            let config = WmConfig::default();
            let area = config.usable_area(crate::math::Size::new(vw, vh));
            let rect = clamp_to_area(Rect::new(top, left, width, height), area, &config);

            prop_assert!(rect.width >= config.min_window_size.width);
            prop_assert!(rect.height >= config.min_window_size.height);
            prop_assert!(rect.top >= 0.0);
            prop_assert!(rect.left >= 0.0);
        }

        /// Clamping is idempotent
        #[test]
        fn clamp_idempotent(
            top in -2000.0f64..2000.0,
            left in -2000.0f64..2000.0,
            width in 0.0f64..3000.0,
            height in 0.0f64..3000.0,
        ) {
            let config = WmConfig::default();
            let area = Rect::new(0.0, 0.0, 1440.0, 852.0);
            let once = clamp_to_area(Rect::new(top, left, width, height), area, &config);
            let twice = clamp_to_area(once, area, &config);
            prop_assert_eq!(once, twice);
        }
    }
}
