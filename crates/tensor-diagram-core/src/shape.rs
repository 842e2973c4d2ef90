//! Visual kinds of tensor glyphs.
//!
//! The engine only reads [`Shape::Dot`] (junction nodes it creates itself);
//! every other kind is a rendering hint passed through to the renderer.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string does not name a known [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tensor shape `{0}`")]
pub struct ParseShapeError(pub String);

/// Glyph used to draw a tensor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Circle,
    /// Small filled junction; used for traces and multi-way summations.
    Dot,
    Asterisk,
    Square,
    /// Tall box sized by the tensor's `rect_height`.
    Rectangle,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Dot => "dot",
            Self::Asterisk => "asterisk",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::TriangleUp => "triangle-up",
            Self::TriangleDown => "triangle-down",
            Self::TriangleLeft => "triangle-left",
            Self::TriangleRight => "triangle-right",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "dot" => Ok(Self::Dot),
            "asterisk" => Ok(Self::Asterisk),
            "square" => Ok(Self::Square),
            "rectangle" => Ok(Self::Rectangle),
            "triangle-up" | "triangleUp" => Ok(Self::TriangleUp),
            "triangle-down" | "triangleDown" => Ok(Self::TriangleDown),
            "triangle-left" | "triangleLeft" => Ok(Self::TriangleLeft),
            "triangle-right" | "triangleRight" => Ok(Self::TriangleRight),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}
