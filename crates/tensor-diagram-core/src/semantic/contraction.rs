//! Edges between tensors and free-standing decoration lines.

use crate::{
    geometry::{GridPoint, Position},
    identifier::Id,
};

/// A summation over a shared index name between two tensors.
///
/// Endpoints are positions in the owning diagram's tensor sequence rather
/// than references, so renaming indices in place never aliases a borrowed
/// tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contraction {
    source: usize,
    target: usize,
    name: Id,
    pos: Position,
}

impl Contraction {
    /// Creates a contraction between the tensors at `source` and `target`.
    ///
    /// # Arguments
    ///
    /// * `source` - Position of the first tensor in the diagram
    /// * `target` - Position of the second tensor in the diagram
    /// * `name` - The shared index name being summed over
    /// * `pos` - Side on which a renderer should put the contraction label
    pub fn new(source: usize, target: usize, name: impl Into<Id>, pos: Position) -> Self {
        Self {
            source,
            target,
            name: name.into(),
            pos,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}

/// A decorative segment drawn between two grid cells.
///
/// Lines are never inspected by summation or formula derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    start: GridPoint,
    end: GridPoint,
    label: Option<String>,
}

impl Line {
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn start(&self) -> GridPoint {
        self.start
    }

    pub fn end(&self) -> GridPoint {
        self.end
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
