//! Tensor nodes.

use crate::{
    geometry::{GridPoint, Position},
    identifier::Id,
    semantic::Index,
    shape::Shape,
};

/// Visual scale of a tensor glyph when none is given.
pub const DEFAULT_TENSOR_SIZE: f32 = 20.0;

/// A node of the diagram: a glyph at a grid cell with indices on its sides.
///
/// `indices` keeps insertion order. Tensors built from four side lists store
/// the left block first, then right, up and down; indices attached later are
/// appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    position: GridPoint,
    name: Id,
    shape: Shape,
    show_label: bool,
    label_pos: Position,
    size: f32,
    indices: Vec<Index>,
    rect_height: usize,
}

impl Tensor {
    /// Creates a circle tensor with a visible label above it.
    ///
    /// `rect_height` is fixed here to the larger of the left and right index
    /// counts. It is not updated by [`Tensor::attach_index`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tensor_diagram_core::{geometry::{GridPoint, Position}, semantic::{Index, Tensor}};
    /// let tensor = Tensor::new(
    ///     GridPoint::new(1, 0),
    ///     "M",
    ///     vec![
    ///         Index::new("i", Position::Left, 0),
    ///         Index::new("j", Position::Right, 0),
    ///         Index::new("k", Position::Right, 1),
    ///     ],
    /// );
    ///
    /// assert_eq!(tensor.rect_height(), 2);
    /// ```
    pub fn new(position: GridPoint, name: impl Into<Id>, indices: Vec<Index>) -> Self {
        let count = |side: Position| {
            indices
                .iter()
                .filter(|index| index.pos() == side)
                .count()
        };
        let rect_height = count(Position::Right).max(count(Position::Left));

        Self {
            position,
            name: name.into(),
            shape: Shape::default(),
            show_label: true,
            label_pos: Position::default(),
            size: DEFAULT_TENSOR_SIZE,
            indices,
            rect_height,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    pub fn with_label_pos(mut self, label_pos: Position) -> Self {
        self.label_pos = label_pos;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x()
    }

    pub fn y(&self) -> i32 {
        self.position.y()
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn show_label(&self) -> bool {
        self.show_label
    }

    pub fn label_pos(&self) -> Position {
        self.label_pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Layout hint for rectangle glyphs, in index slots.
    pub fn rect_height(&self) -> usize {
        self.rect_height
    }

    /// Finds the first index called `name`, with its slot in [`Tensor::indices`].
    pub fn index_named(&self, name: Id) -> Option<(usize, &Index)> {
        self.indices
            .iter()
            .enumerate()
            .find(|(_, index)| index.name() == name)
    }

    pub fn has_index(&self, name: Id) -> bool {
        self.index_named(name).is_some()
    }

    /// Iterates over the indices on one side, in slot order.
    pub fn indices_on(&self, side: Position) -> impl Iterator<Item = &Index> {
        self.indices.iter().filter(move |index| index.pos() == side)
    }

    /// Number of indices on one side.
    pub fn side_count(&self, side: Position) -> usize {
        self.indices_on(side).count()
    }

    /// Appends an index to a side, ranked after the indices already there.
    pub fn attach_index(&mut self, name: Id, side: Position, show_label: bool) -> Index {
        let index = Index::new(name, side, self.side_count(side)).with_show_label(show_label);
        self.indices.push(index);
        index
    }

    /// Renames the index in `slot`, returning its previous name.
    ///
    /// Returns `None` and leaves the tensor unchanged if `slot` is out of range.
    pub fn rename_index(&mut self, slot: usize, name: Id) -> Option<Id> {
        let index = self.indices.get_mut(slot)?;
        let previous = index.name();
        *index = index.renamed(name);
        Some(previous)
    }
}
