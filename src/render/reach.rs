//! Transitive discovery of the types and enums a document must include.
//!
//! The reference graph over named entities is directed and may contain
//! cycles; both walks are bounded by a visited set keyed by entity name,
//! checked before expansion. References that do not resolve against the
//! model registries contribute nothing and are never reported.

use std::collections::HashSet;

use crate::model::{EnumDef, Interface, ServiceModel, TypeDef, TypeRef};

/// Collect every composite type reachable from the interface's method
/// parameters and return types, transitively through type properties. Each
/// type appears at most once; order is discovery order, sorted later by
/// the caller.
pub fn reachable_types<'a>(model: &'a ServiceModel, interface: &Interface) -> Vec<&'a TypeDef> {
	let mut visited = HashSet::new();
	let mut found = Vec::new();
	for method in &interface.methods {
		for reference in method_references(method) {
			if let Some(name) = reference.named() {
				visit_type(model, name, &mut visited, &mut found);
			}
		}
	}
	found
}

fn visit_type<'a>(
	model: &'a ServiceModel,
	name: &str,
	visited: &mut HashSet<String>,
	found: &mut Vec<&'a TypeDef>,
) {
	// Inserting before expansion is what bounds the walk on cyclic graphs.
	if !visited.insert(name.to_string()) {
		return;
	}
	let Some(ty) = model.resolve_type(name) else {
		return;
	};
	found.push(ty);
	for property in &ty.properties {
		if let Some(inner) = property.type_ref.named() {
			visit_type(model, inner, visited, found);
		}
	}
}

/// Collect every enumeration referenced by the interface's methods or by a
/// property of any reachable type. Enums are leaves, so no further
/// expansion happens past them.
pub fn reachable_enums<'a>(model: &'a ServiceModel, interface: &Interface) -> Vec<&'a EnumDef> {
	let mut seen = HashSet::new();
	let mut found = Vec::new();
	for method in &interface.methods {
		for reference in method_references(method) {
			collect_enum(model, reference, &mut seen, &mut found);
		}
	}
	for ty in reachable_types(model, interface) {
		for property in &ty.properties {
			collect_enum(model, &property.type_ref, &mut seen, &mut found);
		}
	}
	found
}

fn collect_enum<'a>(
	model: &'a ServiceModel,
	reference: &TypeRef,
	seen: &mut HashSet<String>,
	found: &mut Vec<&'a EnumDef>,
) {
	let Some(name) = reference.named() else {
		return;
	};
	if !seen.insert(name.to_string()) {
		return;
	}
	if let Some(en) = model.resolve_enum(name) {
		found.push(en);
	}
}

fn method_references(method: &crate::model::Method) -> impl Iterator<Item = &TypeRef> {
	method
		.parameters
		.iter()
		.map(|parameter| &parameter.type_ref)
		.chain(method.return_type.as_ref().map(|ret| &ret.type_ref))
}
