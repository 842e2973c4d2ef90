//! Named indices attached to tensor sides.

use crate::{geometry::Position, identifier::Id};

/// A named connection point on one side of a tensor.
///
/// `order` is the zero-based rank among the indices sharing the same side of
/// the same tensor; renderers use it to space the index lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index {
    name: Id,
    pos: Position,
    order: usize,
    show_label: bool,
}

impl Index {
    /// Creates a labelled index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tensor_diagram_core::{geometry::Position, semantic::Index};
    /// let index = Index::new("i", Position::Left, 0);
    ///
    /// assert_eq!(index.name(), "i");
    /// assert!(index.show_label());
    /// ```
    pub fn new(name: impl Into<Id>, pos: Position, order: usize) -> Self {
        Self {
            name: name.into(),
            pos,
            order,
            show_label: true,
        }
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    /// Returns a copy of this index under another name, keeping side, order
    /// and label visibility.
    pub fn renamed(self, name: Id) -> Self {
        Self { name, ..self }
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn show_label(&self) -> bool {
        self.show_label
    }
}
