//! Configuration types for diagram defaults.
//!
//! All types implement [`serde::Deserialize`] so callers can load them from
//! any serde format. Every section and field is optional.
//!
//! # Overview
//!
//! - [`DiagramConfig`] - Top-level configuration combining canvas and tensor settings.
//! - [`TensorConfig`] - Defaults for tensors whose options leave a value unset.
//!
//! # Example
//!
//! ```
//! # use tensor_diagram::config::DiagramConfig;
//! let config = DiagramConfig::default();
//! assert_eq!(config.canvas().width(), 300.0);
//! assert_eq!(config.tensor().size(), 20.0);
//! ```

use serde::Deserialize;

use tensor_diagram_core::{
    geometry::{CanvasSize, Position},
    semantic::DEFAULT_TENSOR_SIZE,
};

/// Top-level diagram configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagramConfig {
    /// Initial canvas size.
    #[serde(default)]
    canvas: CanvasSize,

    /// Tensor defaults section.
    #[serde(default)]
    tensor: TensorConfig,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`].
    ///
    /// # Arguments
    ///
    /// * `canvas` - Canvas size a fresh diagram starts with.
    /// * `tensor` - Defaults applied to new tensors.
    pub fn new(canvas: CanvasSize, tensor: TensorConfig) -> Self {
        Self { canvas, tensor }
    }

    /// Returns the initial canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Returns the tensor defaults.
    pub fn tensor(&self) -> &TensorConfig {
        &self.tensor
    }
}

/// Defaults for tensors created by the builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TensorConfig {
    /// Visual scale of tensor glyphs.
    size: f32,

    /// Side on which tensor labels are drawn.
    label_pos: Position,
}

impl TensorConfig {
    pub fn new(size: f32, label_pos: Position) -> Self {
        Self { size, label_pos }
    }

    /// Returns the default glyph size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the default label side.
    pub fn label_pos(&self) -> Position {
        self.label_pos
    }
}

impl Default for TensorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_TENSOR_SIZE,
            label_pos: Position::default(),
        }
    }
}
