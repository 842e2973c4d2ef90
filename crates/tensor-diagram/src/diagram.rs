//! The diagram aggregate and its builder operations.

use log::{debug, trace, warn};

use tensor_diagram_core::{
    geometry::{CanvasSize, GridPoint, Position},
    identifier::Id,
    semantic::{Contraction, Index, Line, Tensor},
    shape::Shape,
};

use crate::{
    config::{DiagramConfig, TensorConfig},
    error::DiagramError,
};

/// Where [`Diagram::add_tensor`] puts a new tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The origin cell, for the first tensor of a diagram.
    Start,
    /// An explicit grid cell.
    At(GridPoint),
    /// One cell right of the most recently added tensor.
    Right,
    /// One cell below the most recently added tensor.
    Down,
}

impl From<GridPoint> for Placement {
    fn from(point: GridPoint) -> Self {
        Self::At(point)
    }
}

impl From<(i32, i32)> for Placement {
    fn from(point: (i32, i32)) -> Self {
        Self::At(point.into())
    }
}

/// Index names for each side of a new tensor.
///
/// # Examples
///
/// ```
/// # use tensor_diagram::IndexSides;
/// let sides = IndexSides::new().left(["i"]).right(["j", "k"]);
/// let indices = sides.into_indices();
///
/// assert_eq!(indices.len(), 3);
/// assert_eq!(indices[2].order(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexSides {
    left: Vec<Id>,
    right: Vec<Id>,
    up: Vec<Id>,
    down: Vec<Id>,
}

impl IndexSides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        self.left = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn right<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        self.right = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn up<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        self.up = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn down<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        self.down = names.into_iter().map(Into::into).collect();
        self
    }

    /// Names on one side, in input order.
    pub fn side(&self, side: Position) -> &[Id] {
        match side {
            Position::Left => &self.left,
            Position::Right => &self.right,
            Position::Up => &self.up,
            Position::Down => &self.down,
        }
    }

    /// Returns true when more than one index sits on the left or right side.
    fn is_tall(&self) -> bool {
        self.left.len() > 1 || self.right.len() > 1
    }

    /// Builds the index list: the left block, then right, up and down, each
    /// ranked by input order.
    pub fn into_indices(self) -> Vec<Index> {
        Position::ALL
            .into_iter()
            .flat_map(|side| {
                self.side(side)
                    .iter()
                    .enumerate()
                    .map(move |(order, &name)| Index::new(name, side, order))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Optional visual settings for [`Diagram::add_tensor`].
///
/// Unset values fall back to the diagram's [`TensorConfig`], except `shape`,
/// which defaults to [`Shape::Rectangle`] for tensors with several indices on
/// the left or right side and to [`Shape::Circle`] otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TensorOpts {
    shape: Option<Shape>,
    show_label: Option<bool>,
    label_pos: Option<Position>,
    size: Option<f32>,
}

impl TensorOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = Some(show_label);
        self
    }

    pub fn with_label_pos(mut self, label_pos: Position) -> Self {
        self.label_pos = Some(label_pos);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A tensor network diagram.
///
/// Tensors are identified by their position in [`Diagram::tensors`];
/// contractions refer to them by that position. Builder operations return
/// `&mut Self` (or `Result<&mut Self, DiagramError>`) so calls can be chained.
#[derive(Debug, Clone)]
pub struct Diagram {
    tensors: Vec<Tensor>,
    contractions: Vec<Contraction>,
    lines: Vec<Line>,
    size: CanvasSize,
    tensor_defaults: TensorConfig,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// Creates an empty diagram with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&DiagramConfig::default())
    }

    /// Creates an empty diagram using `config` for the canvas size and
    /// tensor defaults.
    pub fn with_config(config: &DiagramConfig) -> Self {
        Self {
            tensors: Vec::new(),
            contractions: Vec::new(),
            lines: Vec::new(),
            size: config.canvas(),
            tensor_defaults: config.tensor().clone(),
        }
    }

    /// Adds a tensor with indices on its sides.
    ///
    /// # Arguments
    ///
    /// * `name` - Tensor name, used as its label and in formulas
    /// * `placement` - Grid cell, or a placement relative to the last tensor
    /// * `sides` - Index names per side
    /// * `opts` - Visual overrides
    ///
    /// # Errors
    ///
    /// - [`DiagramError::EmptyDiagram`] when `placement` is
    ///   [`Placement::Right`] or [`Placement::Down`] and no tensor exists yet
    /// - [`DiagramError::GridOverflow`] when the relative cell lies outside
    ///   the `i32` grid
    pub fn add_tensor(
        &mut self,
        name: impl Into<Id>,
        placement: impl Into<Placement>,
        sides: IndexSides,
        opts: TensorOpts,
    ) -> Result<&mut Self, DiagramError> {
        let name = name.into();
        let position = self.resolve_placement(name, placement.into())?;

        let shape = opts.shape.unwrap_or(if sides.is_tall() {
            Shape::Rectangle
        } else {
            Shape::Circle
        });

        let tensor = Tensor::new(position, name, sides.into_indices())
            .with_shape(shape)
            .with_show_label(opts.show_label.unwrap_or(true))
            .with_label_pos(opts.label_pos.unwrap_or(self.tensor_defaults.label_pos()))
            .with_size(opts.size.unwrap_or(self.tensor_defaults.size()));

        debug!(
            tensor:% = name,
            x = position.x(),
            y = position.y(),
            shape:% = shape,
            indices = tensor.indices().len();
            "Added tensor"
        );

        self.tensors.push(tensor);
        Ok(self)
    }

    /// Records a contraction of index `name` between the tensors at
    /// positions `source` and `target`.
    ///
    /// The endpoints are not required to carry an index called `name`; a
    /// warning is logged when one of them does not.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::IndexOutOfRange`] if either position is not a
    /// tensor of this diagram.
    pub fn add_contraction(
        &mut self,
        source: usize,
        target: usize,
        name: impl Into<Id>,
        pos: Option<Position>,
    ) -> Result<&mut Self, DiagramError> {
        let len = self.tensors.len();
        if let Some(index) = [source, target].into_iter().find(|&index| index >= len) {
            return Err(DiagramError::IndexOutOfRange { index, len });
        }

        let name = name.into();
        for endpoint in [source, target] {
            let tensor = &self.tensors[endpoint];
            if !tensor.has_index(name) {
                warn!(
                    tensor:% = tensor.name(),
                    index:% = name;
                    "Contraction endpoint does not carry the contracted index"
                );
            }
        }

        self.push_contraction(Contraction::new(
            source,
            target,
            name,
            pos.unwrap_or_default(),
        ));
        Ok(self)
    }

    /// Adds a decorative line.
    pub fn add_line(&mut self, line: Line) -> &mut Self {
        trace!(line:?; "Added line");
        self.lines.push(line);
        self
    }

    /// Sets the canvas size.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.size = CanvasSize::new(width, height);
        self
    }

    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }

    pub fn tensor(&self, index: usize) -> Option<&Tensor> {
        self.tensors.get(index)
    }

    /// The most recently added tensor.
    pub fn last_tensor(&self) -> Option<&Tensor> {
        self.tensors.last()
    }

    pub fn contractions(&self) -> &[Contraction] {
        &self.contractions
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Resolves the endpoints of a contraction of this diagram.
    pub fn contraction_endpoints(&self, contraction: &Contraction) -> Option<(&Tensor, &Tensor)> {
        Some((
            self.tensor(contraction.source())?,
            self.tensor(contraction.target())?,
        ))
    }

    /// Defaults applied to tensors created by this diagram.
    pub(crate) fn tensor_defaults(&self) -> &TensorConfig {
        &self.tensor_defaults
    }

    pub(crate) fn push_tensor(&mut self, tensor: Tensor) -> usize {
        self.tensors.push(tensor);
        self.tensors.len() - 1
    }

    pub(crate) fn tensor_mut(&mut self, index: usize) -> Option<&mut Tensor> {
        self.tensors.get_mut(index)
    }

    pub(crate) fn push_contraction(&mut self, contraction: Contraction) {
        debug!(
            source = contraction.source(),
            target = contraction.target(),
            index:% = contraction.name();
            "Added contraction"
        );
        self.contractions.push(contraction);
    }

    fn resolve_placement(&self, name: Id, placement: Placement) -> Result<GridPoint, DiagramError> {
        let relative_to = |side: Position| {
            let last = self
                .last_tensor()
                .ok_or(DiagramError::EmptyDiagram { tensor: name })?;
            last.position()
                .step(side)
                .ok_or(DiagramError::GridOverflow {
                    tensor: last.name(),
                })
        };

        match placement {
            Placement::Start => Ok(GridPoint::default()),
            Placement::At(point) => Ok(point),
            Placement::Right => relative_to(Position::Right),
            Placement::Down => relative_to(Position::Down),
        }
    }
}
