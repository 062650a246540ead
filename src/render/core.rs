//! Renderer configuration and the engine entry point.

use crate::model::{Interface, ServiceModel};

use super::path::output_path;
use super::state::RenderState;

/// A rendered document paired with its output location. Writing the file
/// to persistent storage is the host collaborator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
	/// Ordered path segments below the output root, ending in the file name.
	pub path: Vec<String>,
	/// Fully rendered document text, newline-joined.
	pub content: String,
}

impl GeneratedFile {
	/// Path segments joined with `/`, for display and host-side writing.
	pub fn path_string(&self) -> String {
		self.path.join("/")
	}
}

/// Configurable renderer that turns a service model into one cross-linked
/// Markdown document per interface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	/// Namespace convention used for fully-qualified labels and output
	/// paths. With no namespace, labels are bare names and paths are flat.
	pub namespace: Option<String>,
	/// Opaque prelude prepended verbatim to every document, ahead of the
	/// header. Hosts use this to inject a generation banner.
	pub prelude: Option<String>,
}

impl Renderer {
	/// Create a new renderer with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the namespace convention.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// Set the opaque prelude block.
	pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
		self.prelude = Some(prelude.into());
		self
	}

	/// Render the document for a single interface.
	pub fn render_interface(&self, model: &ServiceModel, interface: &Interface) -> String {
		RenderState::new(self, model).render(interface)
	}

	/// Render every interface in the model, returning one virtual file per
	/// interface in model order. Pure transformation: no I/O, and the model
	/// is never mutated, so repeated invocations yield identical output.
	pub fn generate(&self, model: &ServiceModel) -> Vec<GeneratedFile> {
		model
			.interfaces
			.iter()
			.map(|interface| GeneratedFile {
				path: output_path(self.namespace.as_deref(), &interface.name),
				content: self.render_interface(model, interface),
			})
			.collect()
	}
}
