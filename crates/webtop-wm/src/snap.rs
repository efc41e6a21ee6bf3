//! Snap engine
//!
//! Stateless functions mapping a pointer position to a snap zone and a snap
//! zone to the exact rectangle a window takes in it.
//!
//! ```text
//!  ┌──┬──────────── maximize ────────────┬──┐
//!  │  │                                   │  │
//!  │ L│                                   │R │   L = left-half
//!  │  │                                   │  │   R = right-half
//!  └──┴───────────────────────────────────┴──┘
//!  |<>| snap_margin
//! ```
//!
//! When the viewport cannot fit two minimum-width windows side by side, the
//! half zones collapse into maximize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::WmConfig;
use crate::error::WmError;
use crate::math::{Point, Rect, Size};

/// Snap zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapTarget {
    #[default]
    None,
    LeftHalf,
    RightHalf,
    Maximize,
}

impl SnapTarget {
    /// Get the string ID for this target
    pub fn id(&self) -> &'static str {
        match self {
            SnapTarget::None => "none",
            SnapTarget::LeftHalf => "left-half",
            SnapTarget::RightHalf => "right-half",
            SnapTarget::Maximize => "maximize",
        }
    }
}

impl FromStr for SnapTarget {
    type Err = WmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SnapTarget::None),
            "left" | "left-half" => Ok(SnapTarget::LeftHalf),
            "right" | "right-half" => Ok(SnapTarget::RightHalf),
            "max" | "maximize" | "maximized" => Ok(SnapTarget::Maximize),
            _ => Err(WmError::parse("snap target", s)),
        }
    }
}

/// Half-width snapping needs room for two floor-width windows.
pub fn halves_allowed(viewport: Size, config: &WmConfig) -> bool {
    viewport.width >= config.min_window_size.width * 2.0
}

/// Apply the narrow-viewport collapse rule.
pub fn effective_target(target: SnapTarget, viewport: Size, config: &WmConfig) -> SnapTarget {
    match target {
        SnapTarget::LeftHalf | SnapTarget::RightHalf if !halves_allowed(viewport, config) => {
            SnapTarget::Maximize
        }
        other => other,
    }
}

/// Snap zone under the pointer.
///
/// Pointers outside the viewport are never in a zone. Left and right edges
/// take precedence over the top edge in the corners.
pub fn detect(pointer: Point, viewport: Size, config: &WmConfig) -> SnapTarget {
    if !pointer.x.is_finite() || !pointer.y.is_finite() || !viewport.contains(pointer.x, pointer.y)
    {
        return SnapTarget::None;
    }

    let margin = config.snap_margin;
    let target = if pointer.x <= margin {
        SnapTarget::LeftHalf
    } else if pointer.x >= viewport.width - margin {
        SnapTarget::RightHalf
    } else if pointer.y <= margin {
        SnapTarget::Maximize
    } else {
        SnapTarget::None
    };
    effective_target(target, viewport, config)
}

/// Exact rectangle for a snap target, or `None` for [`SnapTarget::None`].
pub fn compute_geometry(target: SnapTarget, viewport: Size, config: &WmConfig) -> Option<Rect> {
    let area = config.usable_area(viewport);
    let min = config.min_window_size;
    let height = area.height.max(min.height);
    let left_width = (area.width / 2.0).floor();

    match effective_target(target, viewport, config) {
        SnapTarget::None => None,
        SnapTarget::LeftHalf => Some(Rect::new(area.top, area.left, left_width, height)),
        SnapTarget::RightHalf => Some(Rect::new(
            area.top,
            area.left + left_width,
            area.width - left_width,
            height,
        )),
        SnapTarget::Maximize => Some(Rect::new(
            area.top,
            area.left,
            area.width.max(min.width),
            height,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(1280.0, 800.0)
    }

    #[test]
    fn test_detect_zones() {
        let config = WmConfig::default();
        let vp = viewport();

        assert_eq!(detect(Point::new(5.0, 400.0), vp, &config), SnapTarget::LeftHalf);
        assert_eq!(detect(Point::new(20.0, 400.0), vp, &config), SnapTarget::LeftHalf);
        assert_eq!(detect(Point::new(1275.0, 400.0), vp, &config), SnapTarget::RightHalf);
        assert_eq!(detect(Point::new(640.0, 3.0), vp, &config), SnapTarget::Maximize);
        assert_eq!(detect(Point::new(640.0, 400.0), vp, &config), SnapTarget::None);
    }

    #[test]
    fn test_detect_corner_prefers_side() {
        let config = WmConfig::default();
        assert_eq!(
            detect(Point::new(2.0, 2.0), viewport(), &config),
            SnapTarget::LeftHalf
        );
    }

    #[test]
    fn test_detect_outside_viewport() {
        let config = WmConfig::default();
        assert_eq!(detect(Point::new(-1.0, 400.0), viewport(), &config), SnapTarget::None);
        assert_eq!(detect(Point::new(640.0, 900.0), viewport(), &config), SnapTarget::None);
        assert_eq!(
            detect(Point::new(f64::NAN, 10.0), viewport(), &config),
            SnapTarget::None
        );
    }

    #[test]
    fn test_compute_halves() {
        let config = WmConfig::default();
        let left = compute_geometry(SnapTarget::LeftHalf, viewport(), &config).unwrap();
        let right = compute_geometry(SnapTarget::RightHalf, viewport(), &config).unwrap();

        assert_eq!(left, Rect::new(0.0, 0.0, 640.0, 752.0));
        assert_eq!(right, Rect::new(0.0, 640.0, 640.0, 752.0));
    }

    #[test]
    fn test_compute_halves_odd_width() {
        let config = WmConfig::default();
        let vp = Size::new(1001.0, 800.0);
        let left = compute_geometry(SnapTarget::LeftHalf, vp, &config).unwrap();
        let right = compute_geometry(SnapTarget::RightHalf, vp, &config).unwrap();
        assert_eq!(left.width + right.width, 1001.0);
        assert_eq!(left.right(), right.left);
    }

    #[test]
    fn test_compute_maximize_excludes_chrome() {
        let mut config = WmConfig::default();
        config.chrome.top = 28.0;
        let max = compute_geometry(SnapTarget::Maximize, viewport(), &config).unwrap();
        assert_eq!(max, Rect::new(28.0, 0.0, 1280.0, 724.0));
    }

    #[test]
    fn test_compute_none() {
        let config = WmConfig::default();
        assert_eq!(compute_geometry(SnapTarget::None, viewport(), &config), None);
    }

    #[test]
    fn test_narrow_viewport_collapses_halves() {
        let config = WmConfig::default();
        let narrow = Size::new(390.0, 844.0);

        assert_eq!(detect(Point::new(3.0, 400.0), narrow, &config), SnapTarget::Maximize);
        assert_eq!(
            detect(Point::new(388.0, 400.0), narrow, &config),
            SnapTarget::Maximize
        );
        assert_eq!(
            compute_geometry(SnapTarget::LeftHalf, narrow, &config),
            compute_geometry(SnapTarget::Maximize, narrow, &config)
        );
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("left".parse::<SnapTarget>().unwrap(), SnapTarget::LeftHalf);
        assert_eq!(
            "right-half".parse::<SnapTarget>().unwrap(),
            SnapTarget::RightHalf
        );
        assert_eq!("MAX".parse::<SnapTarget>().unwrap(), SnapTarget::Maximize);
        assert!("top".parse::<SnapTarget>().is_err());
    }
}
