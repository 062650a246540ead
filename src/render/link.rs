//! Anchor and cross-link construction for rendered documents.
//!
//! Every entity section heading in a document implies a link fragment, and
//! the table of contents and type references point at those fragments. The
//! helpers here are the single source of that mapping.

use crate::model::{ServiceModel, TypeRef};

/// Trailing marker appended to array references, outside any link.
pub const ARRAY_MARKER: &str = "[]";

/// Convert a display name into a same-document link fragment: lowercased,
/// spaces replaced with hyphens, prefixed with `#`.
pub fn anchor(display_name: &str) -> String {
	format!("#{}", display_name.to_lowercase().replace(' ', "-"))
}

/// Strip any namespace qualifier from a reference name, leaving the bare
/// entity name used for headings and link text.
pub fn bare_name(name: &str) -> &str {
	name.rsplit("::").next().unwrap_or(name)
}

/// Join a namespace and an entity name into a fully-qualified label.
pub fn qualified_name(namespace: Option<&str>, name: &str) -> String {
	match namespace {
		Some(namespace) if !namespace.is_empty() => format!("{namespace}::{name}"),
		_ => name.to_string(),
	}
}

/// Render a type reference as display text. Primitives stay plain text,
/// named references that resolve against the model become same-document
/// links, and dangling references degrade to their bare name with no link.
pub fn linked_type_name(model: &ServiceModel, reference: &TypeRef, is_array: bool) -> String {
	let marker = if is_array { ARRAY_MARKER } else { "" };
	match reference {
		TypeRef::Primitive(kind) => format!("{}{marker}", kind.label()),
		TypeRef::Named(name) => {
			let bare = bare_name(name);
			if model.resolve_type(name).is_some() || model.resolve_enum(name).is_some() {
				format!("[{bare}]({}){marker}", anchor(bare))
			} else {
				format!("{bare}{marker}")
			}
		}
	}
}
