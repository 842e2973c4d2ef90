//! Geometric primitives for tensor diagram placement.
//!
//! # Overview
//!
//! - [`GridPoint`] - An integer cell of the diagram grid
//! - [`Position`] - One of the four sides of a tensor glyph
//! - [`CanvasSize`] - Width and height of the rendering canvas
//!
//! # Coordinate System
//!
//! Tensors live on an integer grid that follows the SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Moving [`Position::Up`] therefore decreases `y`, and moving
//! [`Position::Down`] increases it.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A cell on the diagram grid.
///
/// # Examples
///
/// ```
/// # use tensor_diagram_core::geometry::{GridPoint, Position};
/// let p = GridPoint::new(2, 3);
///
/// assert_eq!(p.step(Position::Left), Some(GridPoint::new(1, 3)));
/// assert_eq!(p.step(Position::Up), Some(GridPoint::new(2, 2)));
///
/// // Leaving the grid is reported instead of wrapping
/// assert_eq!(GridPoint::new(i32::MAX, 0).step(Position::Right), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    /// Creates a new grid point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate (column)
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate (row)
    pub fn y(self) -> i32 {
        self.y
    }

    /// Translates this point by the given deltas.
    ///
    /// Returns `None` if either coordinate overflows `i32`.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Returns the neighbouring cell on the given side, or `None` at the
    /// edge of the `i32` grid.
    pub fn step(self, side: Position) -> Option<Self> {
        let (dx, dy) = side.unit_offset();
        self.offset(dx, dy)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Error returned when a string does not name a tensor side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid index position `{0}`, valid values: left, right, up, down")]
pub struct ParsePositionError(pub String);

/// A side of a tensor glyph.
///
/// Indices are attached to a side, labels are drawn on a side, and
/// contractions use a side as a hint for where their label goes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
    #[default]
    Up,
    Down,
}

impl Position {
    /// All sides, in the order tensor indices are laid out.
    pub const ALL: [Position; 4] = [
        Position::Left,
        Position::Right,
        Position::Up,
        Position::Down,
    ];

    /// Returns the facing side. This is an involution.
    ///
    /// ```
    /// # use tensor_diagram_core::geometry::Position;
    /// assert_eq!(Position::Left.opposite(), Position::Right);
    /// assert_eq!(Position::Up.opposite().opposite(), Position::Up);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Grid delta of one step towards this side.
    pub fn unit_offset(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Returns true for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(ParsePositionError(s.to_string())),
        }
    }
}

/// Width and height of the canvas a renderer draws the diagram on.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    width: f32,
    height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_offset() {
        let p = GridPoint::new(1, 1).offset(2, -3);
        assert_eq!(p, Some(GridPoint::new(3, -2)));
    }

    #[test]
    fn test_grid_point_offset_overflow() {
        assert_eq!(GridPoint::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(GridPoint::new(0, i32::MIN).offset(0, -1), None);
        assert_eq!(GridPoint::new(i32::MIN, 0).step(Position::Left), None);
        assert_eq!(GridPoint::new(0, i32::MAX).step(Position::Down), None);
    }

    #[test]
    fn test_grid_point_step_follows_svg_axes() {
        let origin = GridPoint::default();

        assert_eq!(origin.step(Position::Left), Some(GridPoint::new(-1, 0)));
        assert_eq!(origin.step(Position::Right), Some(GridPoint::new(1, 0)));
        assert_eq!(origin.step(Position::Up), Some(GridPoint::new(0, -1)));
        assert_eq!(origin.step(Position::Down), Some(GridPoint::new(0, 1)));
    }

    #[test]
    fn test_grid_point_from_tuple() {
        let p: GridPoint = (4, 5).into();
        assert_eq!(p.x(), 4);
        assert_eq!(p.y(), 5);
    }

    #[test]
    fn test_position_opposite() {
        assert_eq!(Position::Left.opposite(), Position::Right);
        assert_eq!(Position::Right.opposite(), Position::Left);
        assert_eq!(Position::Up.opposite(), Position::Down);
        assert_eq!(Position::Down.opposite(), Position::Up);
    }

    #[test]
    fn test_position_default_is_up() {
        assert_eq!(Position::default(), Position::Up);
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("left".parse::<Position>(), Ok(Position::Left));
        assert_eq!("down".parse::<Position>(), Ok(Position::Down));

        let err = "diagonal".parse::<Position>().unwrap_err();
        assert_eq!(err, ParsePositionError("diagonal".to_string()));
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn test_position_display_round_trips() {
        for side in Position::ALL {
            assert_eq!(side.to_string().parse::<Position>(), Ok(side));
        }
    }

    #[test]
    fn test_position_is_horizontal() {
        assert!(Position::Left.is_horizontal());
        assert!(Position::Right.is_horizontal());
        assert!(!Position::Up.is_horizontal());
        assert!(!Position::Down.is_horizontal());
    }

    #[test]
    fn test_canvas_size_default() {
        let size = CanvasSize::default();
        assert_eq!(size.width(), 300.0);
        assert_eq!(size.height(), 300.0);
    }
}
