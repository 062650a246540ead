//! In-memory schema model consumed by the documentation engine.
//!
//! The model is produced by an upstream loader (typically from JSON) and is
//! read-only for the duration of a generation run. Type and enum names are
//! unique within a model; method names are unique within an interface. The
//! engine never mutates a loaded model.

use serde::{Deserialize, Serialize};

/// Root of a loaded service schema: the interfaces to document plus flat
/// registries of composite types and enumerations addressable by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceModel {
	/// Interfaces to generate one document each for, in source order.
	#[serde(default)]
	pub interfaces: Vec<Interface>,
	/// Registry of named composite types.
	#[serde(default)]
	pub types: Vec<TypeDef>,
	/// Registry of named enumerations.
	#[serde(default)]
	pub enums: Vec<EnumDef>,
}

impl ServiceModel {
	/// Parse a model from its JSON source representation.
	pub fn from_json(source: &str) -> serde_json::Result<Self> {
		serde_json::from_str(source)
	}

	/// Look up a composite type by exact name. Dangling references resolve
	/// to `None` and are skipped by callers, never treated as a fault.
	pub fn resolve_type(&self, name: &str) -> Option<&TypeDef> {
		self.types.iter().find(|ty| ty.name == name)
	}

	/// Look up an enumeration by exact name.
	pub fn resolve_enum(&self, name: &str) -> Option<&EnumDef> {
		self.enums.iter().find(|en| en.name == name)
	}
}

/// A named group of methods, documented as one output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
	/// Interface name, used for the document header and output file stem.
	pub name: String,
	/// Methods exposed by the interface, in source order.
	#[serde(default)]
	pub methods: Vec<Method>,
}

/// A single callable operation on an interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
	/// Method name.
	pub name: String,
	/// Parameters in declaration order.
	#[serde(default)]
	pub parameters: Vec<Member>,
	/// Result type, when the method returns a value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub return_type: Option<ReturnType>,
	/// Free-form description shown below the signature.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
}

/// A method parameter or a composite type property. Both carry the same
/// shape: a name, a type reference, array/required flags, and an optional
/// description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
	/// Member name.
	pub name: String,
	/// Referenced type.
	#[serde(rename = "type")]
	pub type_ref: TypeRef,
	/// Whether the member holds a list of the referenced type.
	#[serde(default)]
	pub is_array: bool,
	/// Whether the member must be supplied. Defaults to required.
	#[serde(default = "default_required")]
	pub is_required: bool,
	/// Free-form description appended to the member's bullet line.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
}

fn default_required() -> bool {
	true
}

/// Result type of a method: a type reference plus an array flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
	/// Referenced type.
	#[serde(rename = "type")]
	pub type_ref: TypeRef,
	/// Whether the method returns a list of the referenced type.
	#[serde(default)]
	pub is_array: bool,
}

/// A named composite record with an ordered property list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDef {
	/// Type name, unique within the model.
	pub name: String,
	/// Properties in declaration order.
	#[serde(default)]
	pub properties: Vec<Member>,
	/// Free-form description shown below the fully-qualified name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
}

/// A named set of literal string values. Enums are leaves: they never
/// reference other entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
	/// Enumeration name, unique within the model.
	pub name: String,
	/// Literal values in declaration order.
	#[serde(default)]
	pub values: Vec<String>,
}

/// A reference to a type: either a built-in scalar marker or a named
/// composite type or enumeration, resolved against the model registries.
///
/// Primitive labels are reserved in the reference grammar, so a bare string
/// deserializes as a primitive when it matches one and as a named reference
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
	/// Built-in scalar requiring no cross-reference.
	Primitive(PrimitiveKind),
	/// Reference to a composite type or enumeration by name.
	Named(String),
}

impl TypeRef {
	/// Name of the referenced entity for named references.
	pub fn named(&self) -> Option<&str> {
		match self {
			Self::Primitive(_) => None,
			Self::Named(name) => Some(name),
		}
	}
}

/// Built-in scalar kinds understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
	/// UTF-8 text.
	String,
	/// 32-bit integer.
	Integer,
	/// 64-bit integer.
	Long,
	/// 32-bit floating point number.
	Float,
	/// 64-bit floating point number.
	Double,
	/// True or false.
	Boolean,
	/// Point in time.
	Timestamp,
	/// Opaque binary payload.
	Blob,
}

impl PrimitiveKind {
	/// Display label used in rendered documents.
	pub fn label(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Integer => "integer",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::Boolean => "boolean",
			Self::Timestamp => "timestamp",
			Self::Blob => "blob",
		}
	}
}

/// Description text normalized into an ordered sequence of lines.
///
/// Loaders may supply either a single string (split on newlines) or an
/// array of lines; both normalize here so rendering has one code path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DescriptionRepr")]
pub struct Description(Vec<String>);

impl Description {
	/// Build a description from pre-split lines.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(lines.into_iter().map(Into::into).collect())
	}

	/// The normalized lines.
	pub fn lines(&self) -> &[String] {
		&self.0
	}

	/// All lines joined with single spaces, for single-line contexts such
	/// as member bullets.
	pub fn joined(&self) -> String {
		self.0.join(" ")
	}

	/// Whether the description carries no text at all.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for Description {
	fn from(text: &str) -> Self {
		Self(text.lines().map(str::to_string).collect())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionRepr {
	Line(String),
	Lines(Vec<String>),
}

impl From<DescriptionRepr> for Description {
	fn from(repr: DescriptionRepr) -> Self {
		match repr {
			DescriptionRepr::Line(text) => Self::from(text.as_str()),
			DescriptionRepr::Lines(lines) => Self(lines),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn primitive_labels_round_trip_through_type_refs() {
		let reference: TypeRef = serde_json::from_str("\"string\"").unwrap();
		assert_eq!(reference, TypeRef::Primitive(PrimitiveKind::String));

		let reference: TypeRef = serde_json::from_str("\"Widget\"").unwrap();
		assert_eq!(reference, TypeRef::Named("Widget".to_string()));
	}

	#[test]
	fn descriptions_normalize_to_lines() {
		let single: Description = serde_json::from_str("\"one\\ntwo\"").unwrap();
		assert_eq!(single.lines(), ["one", "two"]);

		let many: Description = serde_json::from_str("[\"one\", \"two\"]").unwrap();
		assert_eq!(many.lines(), ["one", "two"]);
		assert_eq!(many.joined(), "one two");
	}

	#[test]
	fn members_default_to_required_scalars() {
		let member: Member = serde_json::from_str(r#"{"name": "id", "type": "string"}"#).unwrap();
		assert!(member.is_required);
		assert!(!member.is_array);
		assert!(member.description.is_none());
	}

	#[test]
	fn resolution_is_exact_match_only() {
		let model = ServiceModel {
			types: vec![TypeDef {
				name: "Widget".to_string(),
				properties: Vec::new(),
				description: None,
			}],
			..ServiceModel::default()
		};

		assert!(model.resolve_type("Widget").is_some());
		assert!(model.resolve_type("widget").is_none());
		assert!(model.resolve_type("Acme::Widget").is_none());
		assert!(model.resolve_enum("Widget").is_none());
	}
}
