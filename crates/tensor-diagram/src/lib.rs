//! Tensor Diagram - a builder for tensor network diagrams.
//!
//! Tensors are placed on an integer grid with named indices on their four
//! sides. Summations over shared index names are recorded as contractions,
//! and the finished diagram can be turned into an einsum formula or a LaTeX
//! summation formula. Drawing is left to a renderer that reads the model
//! through [`Diagram::tensors`], [`Diagram::contractions`] and
//! [`Diagram::lines`].
//!
//! # Example
//!
//! ```
//! use tensor_diagram::{Diagram, IndexSides, Placement, TensorOpts};
//!
//! # fn main() -> Result<(), tensor_diagram::DiagramError> {
//! let mut diagram = Diagram::new();
//! diagram
//!     .add_tensor("A", Placement::Start, IndexSides::new().down(["j"]), TensorOpts::default())?
//!     .add_tensor("B", Placement::Right, IndexSides::new().up(["j"]), TensorOpts::default())?
//!     .add_summation("j", None)?;
//!
//! assert_eq!(diagram.to_formula_einsum(), "einsum('j,j->', A, B)");
//! assert_eq!(diagram.to_formula_latex(), r"\sum_{j} A_{j} B_{j}");
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! A [`Diagram`] is a plain value mutated through `&mut self`. Sharing one
//! diagram between threads requires external synchronization.

pub mod config;

mod diagram;
mod error;
mod formula;
mod summation;

pub use tensor_diagram_core::{geometry, identifier, semantic, shape};

pub use diagram::{Diagram, IndexSides, Placement, TensorOpts};
pub use error::DiagramError;
