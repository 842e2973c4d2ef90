//! Error types for diagram building.
//!
//! Every failure is detected before the diagram is mutated, so an `Err`
//! leaves the diagram exactly as it was before the call.

use thiserror::Error;

use tensor_diagram_core::{geometry::ParsePositionError, identifier::Id};

/// The error type for [`Diagram`](crate::Diagram) builder operations.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("cannot place tensor `{tensor}` relative to the last tensor: the diagram is empty")]
    EmptyDiagram { tensor: Id },

    #[error("tensor index {index} is out of range for a diagram with {len} tensors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no tensor carries an index named `{name}`")]
    NoMatchingIndex { name: Id },

    #[error(transparent)]
    InvalidIndexPosition(#[from] ParsePositionError),

    #[error("summing `{name}` over {count} tensors requires a position for the dot tensor")]
    MissingPosition { name: Id, count: usize },

    #[error("placing a tensor next to `{tensor}` leaves the grid")]
    GridOverflow { tensor: Id },
}
