//! Tensor Diagram Core Types
//!
//! This crate provides the model types shared by every tensor network diagram
//! consumer. It includes:
//!
//! - **Identifiers**: Interned tensor and index names ([`identifier::Id`])
//! - **Geometry**: Grid coordinates, canvas size and tensor sides ([`geometry`] module)
//! - **Shapes**: Visual kinds of tensor glyphs ([`shape::Shape`])
//! - **Semantic**: Indices, tensors, contractions and lines ([`semantic`] module)

pub mod geometry;
pub mod identifier;
pub mod semantic;
pub mod shape;
