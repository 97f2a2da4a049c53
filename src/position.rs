use std::fmt;
use std::str::FromStr;

use crate::geometry::{Offset, Rect};

/// Text direction of the surrounding UI. Affects mirrored placement and
/// directional key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

/// Where a floating panel sits relative to its anchor.
///
/// `Center`, `Reveal`, and `RevealFull` are anchored to the viewport and
/// ignore the anchor rect entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Top,
    Left,
    Right,
    CenterTop,
    CenterBottom,
    CenterLeft,
    CenterRight,
    Center,
    Reveal,
    RevealFull,
    LeftBottom,
    RightBottom,
    #[default]
    Bottom,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Left => "left",
            Position::Right => "right",
            Position::CenterTop => "center top",
            Position::CenterBottom => "center bottom",
            Position::CenterLeft => "center left",
            Position::CenterRight => "center right",
            Position::Center => "center",
            Position::Reveal => "reveal",
            Position::RevealFull => "reveal full",
            Position::LeftBottom => "left bottom",
            Position::RightBottom => "right bottom",
            Position::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position {:?}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.trim() {
            "top" => Position::Top,
            "left" => Position::Left,
            "right" => Position::Right,
            "center top" => Position::CenterTop,
            "center bottom" => Position::CenterBottom,
            "center left" => Position::CenterLeft,
            "center right" => Position::CenterRight,
            "center" => Position::Center,
            "reveal" => Position::Reveal,
            "reveal full" => Position::RevealFull,
            "left bottom" => Position::LeftBottom,
            "right bottom" => Position::RightBottom,
            "bottom" => Position::Bottom,
            other => return Err(ParsePositionError(other.to_string())),
        };
        Ok(pos)
    }
}

/// Absolute page offset that places `element` at `position` relative to
/// `anchor`, inside `window` (the viewport's page rect).
///
/// `anchored_overflow` applies only to `CenterBottom`: the panel pins to the
/// raw horizontal offset instead of centering on the anchor. Used when the
/// caller has already decided to force the panel to viewport width.
#[allow(clippy::too_many_arguments)]
pub fn offsets(
    element: Rect,
    anchor: Rect,
    window: Rect,
    position: Position,
    v_offset: f64,
    h_offset: f64,
    direction: TextDirection,
    anchored_overflow: bool,
) -> Offset {
    match position {
        Position::Top => Offset {
            left: if direction.is_rtl() {
                anchor.offset.left - element.width + anchor.width
            } else {
                anchor.offset.left
            },
            top: anchor.offset.top - (element.height + v_offset),
        },
        Position::Left => Offset {
            left: anchor.offset.left - (element.width + h_offset),
            top: anchor.offset.top,
        },
        Position::Right => Offset {
            left: anchor.right() + h_offset,
            top: anchor.offset.top,
        },
        Position::CenterTop => Offset {
            left: anchor.offset.left + anchor.width / 2.0 - element.width / 2.0,
            top: anchor.offset.top - (element.height + v_offset),
        },
        Position::CenterBottom => Offset {
            left: if anchored_overflow {
                h_offset
            } else {
                anchor.offset.left + anchor.width / 2.0 - element.width / 2.0
            },
            top: anchor.bottom() + v_offset,
        },
        Position::CenterLeft => Offset {
            left: anchor.offset.left - (element.width + h_offset),
            top: anchor.offset.top + anchor.height / 2.0 - element.height / 2.0,
        },
        Position::CenterRight => Offset {
            left: anchor.right() + h_offset + 1.0,
            top: anchor.offset.top + anchor.height / 2.0 - element.height / 2.0,
        },
        Position::Center => Offset {
            left: window.offset.left + window.width / 2.0 - element.width / 2.0,
            top: window.offset.top + window.height / 2.0 - element.height / 2.0,
        },
        Position::Reveal => Offset {
            left: (window.width - element.width) / 2.0,
            top: window.offset.top + v_offset,
        },
        Position::RevealFull => Offset {
            left: window.offset.left,
            top: window.offset.top,
        },
        Position::LeftBottom => Offset {
            left: anchor.offset.left,
            top: anchor.bottom() + v_offset,
        },
        Position::RightBottom => Offset {
            left: anchor.right() + h_offset - element.width,
            top: anchor.bottom() + v_offset,
        },
        Position::Bottom => Offset {
            left: if direction.is_rtl() {
                anchor.offset.left - element.width + anchor.width
            } else {
                anchor.offset.left + h_offset
            },
            top: anchor.bottom() + v_offset,
        },
    }
}
