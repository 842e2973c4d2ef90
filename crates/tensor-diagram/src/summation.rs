//! Summation over a named index.
//!
//! How a summation is drawn depends on how many tensors carry the index:
//!
//! - one tensor: a trace, closed through a new dot tensor next to it
//! - two tensors: a plain contraction between them
//! - three or more: a star around a new dot tensor, with each contributing
//!   index renamed `name0`, `name1`, ... so every edge has a unique name
//!
//! The change is first computed as a [`SummationPlan`] without touching the
//! diagram and then applied in one step, so a failing call changes nothing.

use log::{debug, trace};

use tensor_diagram_core::{
    geometry::{GridPoint, Position},
    identifier::Id,
    semantic::{Contraction, Index, Tensor},
    shape::Shape,
};

use crate::{Diagram, error::DiagramError};

/// An index rename applied to an existing tensor.
#[derive(Debug)]
struct Rename {
    tensor: usize,
    slot: usize,
    name: Id,
}

#[derive(Debug)]
enum SummationPlan {
    Trace { tensor: usize, dot: Tensor },
    Pair { source: usize, target: usize },
    Star { hub: Tensor, renames: Vec<Rename> },
}

impl Diagram {
    /// Sums over index `name`.
    ///
    /// Tensors are counted, not indices: a tensor carrying `name` on two
    /// sides counts once, so it is closed with a trace dot on its first
    /// matching index rather than contracted with itself.
    ///
    /// # Arguments
    ///
    /// * `name` - Index name to sum over
    /// * `position` - Grid cell of the dot tensor; only used, and then
    ///   required, when three or more tensors carry `name`
    ///
    /// # Errors
    ///
    /// - [`DiagramError::NoMatchingIndex`] if no tensor carries `name`
    /// - [`DiagramError::MissingPosition`] if three or more tensors carry
    ///   `name` and `position` is `None`
    /// - [`DiagramError::GridOverflow`] if a trace dot would land outside
    ///   the `i32` grid
    ///
    /// # Examples
    ///
    /// ```
    /// use tensor_diagram::{Diagram, IndexSides, Placement, TensorOpts, geometry::GridPoint};
    ///
    /// # fn main() -> Result<(), tensor_diagram::DiagramError> {
    /// let mut diagram = Diagram::new();
    /// for name in ["A", "B", "C"] {
    ///     let placement = if name == "A" { Placement::Start } else { Placement::Right };
    ///     diagram.add_tensor(name, placement, IndexSides::new().down(["k"]), TensorOpts::default())?;
    /// }
    /// diagram.add_summation("k", Some(GridPoint::new(1, 1)))?;
    ///
    /// assert_eq!(diagram.tensors().len(), 4);
    /// assert_eq!(diagram.to_formula_latex(), r"\sum_{k0k1k2} A_{k0} B_{k1} C_{k2} _{k0k1k2}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_summation(
        &mut self,
        name: impl Into<Id>,
        position: Option<GridPoint>,
    ) -> Result<&mut Self, DiagramError> {
        let name = name.into();
        let plan = self.plan_summation(name, position)?;
        trace!(plan:?; "Planned summation");
        self.apply_summation(name, plan);
        Ok(self)
    }

    fn plan_summation(
        &self,
        name: Id,
        position: Option<GridPoint>,
    ) -> Result<SummationPlan, DiagramError> {
        let relevant: Vec<usize> = self
            .tensors()
            .iter()
            .enumerate()
            .filter(|(_, tensor)| tensor.has_index(name))
            .map(|(i, _)| i)
            .collect();

        match relevant.as_slice() {
            [] => Err(DiagramError::NoMatchingIndex { name }),
            &[tensor] => {
                let owner = &self.tensors()[tensor];
                let (_, index) = owner
                    .index_named(name)
                    .ok_or(DiagramError::NoMatchingIndex { name })?;

                let position = trace_dot_position(owner.position(), index)
                    .ok_or(DiagramError::GridOverflow {
                        tensor: owner.name(),
                    })?;
                let side = index.pos().opposite();
                let dot = self.dot_tensor(
                    position,
                    vec![Index::new(name, side, 0).with_show_label(false)],
                );
                Ok(SummationPlan::Trace { tensor, dot })
            }
            &[source, target] => Ok(SummationPlan::Pair { source, target }),
            _ => {
                let position = position.ok_or(DiagramError::MissingPosition {
                    name,
                    count: relevant.len(),
                })?;

                let mut hub = self.dot_tensor(position, Vec::new());
                let mut renames = Vec::with_capacity(relevant.len());
                for (k, &tensor) in relevant.iter().enumerate() {
                    let (slot, index) = self.tensors()[tensor]
                        .index_named(name)
                        .ok_or(DiagramError::NoMatchingIndex { name })?;

                    let renamed = name.with_suffix(k);
                    hub.attach_index(renamed, index.pos().opposite(), false);
                    renames.push(Rename {
                        tensor,
                        slot,
                        name: renamed,
                    });
                }
                Ok(SummationPlan::Star { hub, renames })
            }
        }
    }

    fn apply_summation(&mut self, name: Id, plan: SummationPlan) {
        match plan {
            SummationPlan::Trace { tensor, dot } => {
                debug!(index:% = name, tensor; "Summing index over a single tensor");
                let dot = self.push_tensor(dot);
                self.push_contraction(Contraction::new(tensor, dot, name, Position::default()));
            }
            SummationPlan::Pair { source, target } => {
                debug!(index:% = name, source, target; "Summing index over two tensors");
                self.push_contraction(Contraction::new(
                    source,
                    target,
                    name,
                    Position::default(),
                ));
            }
            SummationPlan::Star { hub, renames } => {
                debug!(index:% = name, tensors = renames.len(); "Summing index through a dot tensor");
                let hub = self.push_tensor(hub);
                for rename in renames {
                    if let Some(tensor) = self.tensor_mut(rename.tensor) {
                        let previous = tensor.rename_index(rename.slot, rename.name);
                        debug_assert_eq!(previous, Some(name));
                    }
                    self.push_contraction(Contraction::new(
                        rename.tensor,
                        hub,
                        rename.name,
                        Position::default(),
                    ));
                }
            }
        }
    }

    /// An unlabelled dot tensor carrying `indices`.
    fn dot_tensor(&self, position: GridPoint, indices: Vec<Index>) -> Tensor {
        let defaults = self.tensor_defaults();
        Tensor::new(position, "", indices)
            .with_shape(Shape::Dot)
            .with_show_label(false)
            .with_label_pos(defaults.label_pos())
            .with_size(defaults.size())
    }
}

/// Cell of the dot closing a trace: one step out from the index's side,
/// shifted along that side by the index's order. `None` when that cell is
/// outside the `i32` grid.
fn trace_dot_position(tensor: GridPoint, index: &Index) -> Option<GridPoint> {
    let order = i32::try_from(index.order()).ok()?;
    let step = tensor.step(index.pos())?;
    if index.pos().is_horizontal() {
        step.offset(0, order)
    } else {
        step.offset(order, 0)
    }
}
