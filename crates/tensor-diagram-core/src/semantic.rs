//! Semantic diagram model types.
//!
//! These are the records a tensor network diagram is made of. They carry
//! absolute grid coordinates and layout hints, and are read as-is by
//! renderers.
//!
//! # Organization
//!
//! - [`index`] - [`Index`], a named connection point on one side of a tensor
//! - [`tensor`] - [`Tensor`], a node of the diagram
//! - [`contraction`] - [`Contraction`] edges and decorative [`Line`]s

pub mod contraction;
pub mod index;
pub mod tensor;

pub use contraction::*;
pub use index::*;
pub use tensor::*;
