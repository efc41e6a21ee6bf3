use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WmError;

/// Edge or corner grabbed by a resize gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeEdge {
    /// The gesture moves the left edge
    pub fn west(&self) -> bool {
        matches!(self, ResizeEdge::W | ResizeEdge::NW | ResizeEdge::SW)
    }

    /// The gesture moves the right edge
    pub fn east(&self) -> bool {
        matches!(self, ResizeEdge::E | ResizeEdge::NE | ResizeEdge::SE)
    }

    /// The gesture moves the top edge
    pub fn north(&self) -> bool {
        matches!(self, ResizeEdge::N | ResizeEdge::NE | ResizeEdge::NW)
    }

    /// The gesture moves the bottom edge
    pub fn south(&self) -> bool {
        matches!(self, ResizeEdge::S | ResizeEdge::SE | ResizeEdge::SW)
    }
}

impl FromStr for ResizeEdge {
    type Err = WmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" => Ok(ResizeEdge::N),
            "s" => Ok(ResizeEdge::S),
            "e" => Ok(ResizeEdge::E),
            "w" => Ok(ResizeEdge::W),
            "ne" => Ok(ResizeEdge::NE),
            "nw" => Ok(ResizeEdge::NW),
            "se" => Ok(ResizeEdge::SE),
            "sw" => Ok(ResizeEdge::SW),
            _ => Err(WmError::parse("resize edge", s)),
        }
    }
}

/// Part of a window a pointer-down landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Title bar (drag handle)
    TitleBar,
    /// Resize edge or corner
    Resize(ResizeEdge),
}

impl FromStr for WindowRegion {
    type Err = WmError;

    /// `"title"` or a resize direction (`"n"`, `"se"`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "titlebar" | "title_bar" => Ok(WindowRegion::TitleBar),
            other => other
                .parse::<ResizeEdge>()
                .map(WindowRegion::Resize)
                .map_err(|_| WmError::parse("window region", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_parse() {
        assert_eq!("se".parse::<ResizeEdge>().unwrap(), ResizeEdge::SE);
        assert_eq!("NW".parse::<ResizeEdge>().unwrap(), ResizeEdge::NW);
        assert!("up".parse::<ResizeEdge>().is_err());
    }

    #[test]
    fn test_edge_axes() {
        assert!(ResizeEdge::NW.north() && ResizeEdge::NW.west());
        assert!(!ResizeEdge::NW.south() && !ResizeEdge::NW.east());
        assert!(ResizeEdge::E.east());
        assert!(!ResizeEdge::E.north() && !ResizeEdge::E.south());
    }

    #[test]
    fn test_region_parse() {
        assert_eq!(
            "title".parse::<WindowRegion>().unwrap(),
            WindowRegion::TitleBar
        );
        assert_eq!(
            "sw".parse::<WindowRegion>().unwrap(),
            WindowRegion::Resize(ResizeEdge::SW)
        );
        assert_eq!(
            "body".parse::<WindowRegion>().unwrap_err(),
            WmError::parse("window region", "body")
        );
    }
}
