//! High-level API for ifacedoc operations.
//!
//! This module provides the `Ifacedoc` orchestrator which ties together
//! model loading, document generation, and host-side writing. It is
//! UI-agnostic and can be used by any frontend (CLI, build script, etc.).

/// Error helpers for the core API.
pub mod error;

use std::path::{Path, PathBuf};

pub use self::error::{IfacedocError, Result};
use crate::model::ServiceModel;
use crate::render::{GeneratedFile, Renderer};

/// Ifacedoc generates one cross-linked Markdown reference document per
/// interface in a service schema model: the interface's methods, the
/// composite types and enumerations those methods reach transitively, and
/// intra-document links between them.
///
/// The generation step is a pure transformation of the loaded model;
/// loading and writing happen at this layer so the engine stays free of
/// I/O.
#[derive(Debug, Clone)]
pub struct Ifacedoc {
	/// Namespace convention used for fully-qualified labels and output paths.
	namespace: Option<String>,

	/// Whether to prepend a generator banner to each document.
	banner: bool,
}

impl Default for Ifacedoc {
	fn default() -> Self {
		Self::new()
	}
}

impl Ifacedoc {
	/// Creates a new Ifacedoc instance with default configuration: no
	/// namespace and the generator banner enabled.
	pub fn new() -> Self {
		Self {
			namespace: None,
			banner: true,
		}
	}

	/// Sets the namespace convention (e.g. `Acme::Api`) used for
	/// fully-qualified labels and output paths.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// Enables or disables the generator banner prepended to documents.
	pub fn with_banner(mut self, banner: bool) -> Self {
		self.banner = banner;
		self
	}

	/// Returns the currently configured namespace, if any.
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Load and parse a service model from a JSON file.
	pub fn load_model(&self, path: &Path) -> Result<ServiceModel> {
		let source = std::fs::read_to_string(path)?;
		Ok(ServiceModel::from_json(&source)?)
	}

	/// Generate every interface document in memory.
	pub fn generate(&self, model: &ServiceModel) -> Vec<GeneratedFile> {
		self.renderer().generate(model)
	}

	/// Generate every interface document and write each below `out_dir`,
	/// creating intermediate directories as needed. Returns the written
	/// paths in generation order.
	pub fn write(&self, model: &ServiceModel, out_dir: &Path) -> Result<Vec<PathBuf>> {
		let mut written = Vec::with_capacity(model.interfaces.len());
		for file in self.generate(model) {
			let mut path = out_dir.to_path_buf();
			for segment in &file.path {
				path.push(segment);
			}
			if let Some(parent) = path.parent() {
				std::fs::create_dir_all(parent)?;
			}
			std::fs::write(&path, &file.content)?;
			written.push(path);
		}
		Ok(written)
	}

	/// Returns a pretty-printed version of the model's JSON representation.
	pub fn raw_json(&self, model: &ServiceModel) -> Result<String> {
		Ok(serde_json::to_string_pretty(model)?)
	}

	/// Build the renderer configured by this instance.
	fn renderer(&self) -> Renderer {
		let mut renderer = Renderer::new();
		if let Some(namespace) = &self.namespace {
			renderer = renderer.with_namespace(namespace.clone());
		}
		if self.banner {
			renderer = renderer.with_prelude(banner_comment());
		}
		renderer
	}
}

/// Banner comment injected ahead of generated documents. The renderer
/// treats it as an opaque prelude and prepends it verbatim.
fn banner_comment() -> String {
	format!(
		"<!-- Generated by ifacedoc {}. Do not edit by hand. -->",
		env!("CARGO_PKG_VERSION")
	)
}
