//! Shared model-building helpers for integration tests.
#![allow(dead_code)]

use ifacedoc::model::{
	EnumDef, Interface, Member, Method, PrimitiveKind, ReturnType, ServiceModel, TypeDef, TypeRef,
};

/// A named reference to a composite type or enumeration.
pub fn named(name: &str) -> TypeRef {
	TypeRef::Named(name.to_string())
}

/// A primitive string reference.
pub fn string() -> TypeRef {
	TypeRef::Primitive(PrimitiveKind::String)
}

/// A required, non-array member with no description.
pub fn member(name: &str, type_ref: TypeRef) -> Member {
	Member {
		name: name.to_string(),
		type_ref,
		is_array: false,
		is_required: true,
		description: None,
	}
}

/// An optional, non-array member with no description.
pub fn optional_member(name: &str, type_ref: TypeRef) -> Member {
	Member {
		is_required: false,
		..member(name, type_ref)
	}
}

/// A method with the given parameters and return type.
pub fn method(name: &str, parameters: Vec<Member>, return_type: Option<ReturnType>) -> Method {
	Method {
		name: name.to_string(),
		parameters,
		return_type,
		description: None,
	}
}

/// A non-array return type.
pub fn returns(type_ref: TypeRef) -> Option<ReturnType> {
	Some(ReturnType {
		type_ref,
		is_array: false,
	})
}

/// An interface holding the given methods.
pub fn interface(name: &str, methods: Vec<Method>) -> Interface {
	Interface {
		name: name.to_string(),
		methods,
	}
}

/// A composite type holding the given properties.
pub fn type_def(name: &str, properties: Vec<Member>) -> TypeDef {
	TypeDef {
		name: name.to_string(),
		properties,
		description: None,
	}
}

/// An enumeration holding the given literal values.
pub fn enum_def(name: &str, values: &[&str]) -> EnumDef {
	EnumDef {
		name: name.to_string(),
		values: values.iter().map(|value| value.to_string()).collect(),
	}
}

/// The canonical example model: one interface `Widgets` with one method
/// `getWidget(id: string) -> Widget`, where `Widget` has a `name: string`
/// property.
pub fn widgets_model() -> ServiceModel {
	ServiceModel {
		interfaces: vec![interface(
			"Widgets",
			vec![method(
				"getWidget",
				vec![member("id", string())],
				returns(named("Widget")),
			)],
		)],
		types: vec![type_def("Widget", vec![member("name", string())])],
		enums: Vec::new(),
	}
}
