//! Core library for ifacedoc, turning a service schema model into
//! cross-linked Markdown reference documents.
//!
//! This crate provides the high-level `Ifacedoc` API which orchestrates
//! model loading, document generation, and output writing. The generation
//! engine itself is a pure transformation: a read-only [`model::ServiceModel`]
//! in, an ordered collection of [`render::GeneratedFile`] values out.

/// Schema model types and reference resolution.
pub mod model;

/// Rendering pipeline that converts a model into Markdown documents.
pub mod render;

/// High-level API for ifacedoc operations.
pub mod core_api;

// Re-export the main public API from core_api and render.
pub use crate::core_api::{Ifacedoc, IfacedocError, Result};
pub use crate::render::{GeneratedFile, Renderer};
