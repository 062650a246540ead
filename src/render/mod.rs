//! Rendering pipeline that converts a service model into cross-linked
//! Markdown documents, one per interface.

/// Renderer configuration and the engine entry point.
pub mod core;
/// Section renderers for methods, types, and enums.
pub mod items;
/// Anchor and cross-link construction.
pub mod link;
/// Output path resolution.
pub mod path;
/// Transitive type and enum discovery.
pub mod reach;
/// Per-document rendering context.
pub mod state;

pub use self::core::{GeneratedFile, Renderer};
pub use self::reach::{reachable_enums, reachable_types};
pub use self::state::RenderState;
