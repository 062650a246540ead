//! Per-document rendering context.

use crate::model::{EnumDef, Interface, Member, Method, ServiceModel, TypeDef};

use super::core::Renderer;
use super::items::{render_contents, render_enum, render_method, render_type};
use super::link::qualified_name;
use super::reach::{reachable_enums, reachable_types};

/// Rendering context shared across section renderers: the immutable
/// renderer configuration plus the model being documented.
pub struct RenderState<'a> {
	/// Reference to the immutable renderer configuration.
	pub config: &'a Renderer,
	/// Schema model the documents are generated from.
	pub model: &'a ServiceModel,
}

impl<'a> RenderState<'a> {
	/// Create a new render state.
	pub fn new(config: &'a Renderer, model: &'a ServiceModel) -> Self {
		Self { config, model }
	}

	/// Render one interface's full document. Sections are emitted in a
	/// fixed sequence (header, contents, methods, types, enums); a section
	/// backed by an empty collection produces no heading and no body.
	pub fn render(&self, interface: &Interface) -> String {
		let methods = self.sorted_methods(interface);
		let types = self.sorted_types(interface);
		let enums = self.sorted_enums(interface);

		let mut output = String::new();

		if let Some(prelude) = &self.config.prelude {
			output.push_str(prelude);
			if !prelude.ends_with('\n') {
				output.push('\n');
			}
			output.push('\n');
		}

		output.push_str(&format!("# {}\n\n", interface.name));
		if self.config.namespace.is_some() {
			output.push_str(&format!("`{}`\n\n", self.qualified(&interface.name)));
		}

		output.push_str(&render_contents(&methods, &types, &enums));

		if !methods.is_empty() {
			output.push_str("## Methods\n\n");
			for method in &methods {
				output.push_str(&render_method(self, method));
			}
		}

		if !types.is_empty() {
			output.push_str("## Types\n\n");
			for ty in &types {
				output.push_str(&render_type(self, ty));
			}
		}

		if !enums.is_empty() {
			output.push_str("## Enums\n\n");
			for en in &enums {
				output.push_str(&render_enum(self, en));
			}
		}

		// Exactly one trailing newline regardless of which section came last.
		output.truncate(output.trim_end_matches('\n').len());
		output.push('\n');
		output
	}

	/// Fully-qualified label for a named entity under the configured
	/// namespace convention.
	pub fn qualified(&self, name: &str) -> String {
		qualified_name(self.config.namespace.as_deref(), name)
	}

	/// The interface's methods in document order.
	fn sorted_methods<'i>(&self, interface: &'i Interface) -> Vec<&'i Method> {
		let mut methods: Vec<&Method> = interface.methods.iter().collect();
		sort_by_name(&mut methods, |method| &method.name);
		methods
	}

	/// The reachable composite types in document order.
	fn sorted_types(&self, interface: &Interface) -> Vec<&'a TypeDef> {
		let mut types = reachable_types(self.model, interface);
		sort_by_name(&mut types, |ty| &ty.name);
		types
	}

	/// The reachable enumerations in document order.
	fn sorted_enums(&self, interface: &Interface) -> Vec<&'a EnumDef> {
		let mut enums = reachable_enums(self.model, interface);
		sort_by_name(&mut enums, |en| &en.name);
		enums
	}
}

/// Impose the document's total order: ordinal comparison of display names,
/// ascending. Not locale-sensitive.
fn sort_by_name<T, F>(items: &mut [&T], name: F)
where
	F: Fn(&T) -> &str,
{
	items.sort_by(|a, b| name(a).cmp(name(b)));
}

/// Order members for a call signature or bullet list: required members
/// first, then optional ones, each group preserving source order.
pub fn ordered_members(members: &[Member]) -> Vec<&Member> {
	let required = members.iter().filter(|member| member.is_required);
	let optional = members.iter().filter(|member| !member.is_required);
	required.chain(optional).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{PrimitiveKind, TypeRef};

	fn member(name: &str, is_required: bool) -> Member {
		Member {
			name: name.to_string(),
			type_ref: TypeRef::Primitive(PrimitiveKind::String),
			is_array: false,
			is_required,
			description: None,
		}
	}

	#[test]
	fn required_members_come_first_and_groups_stay_stable() {
		let members = vec![
			member("optionalA", false),
			member("requiredB", true),
			member("optionalC", false),
			member("requiredD", true),
		];
		let ordered: Vec<&str> = ordered_members(&members)
			.iter()
			.map(|member| member.name.as_str())
			.collect();
		assert_eq!(ordered, ["requiredB", "requiredD", "optionalA", "optionalC"]);
	}

	#[test]
	fn name_order_is_ordinal_and_case_sensitive() {
		let a = member("apple", true);
		let b = member("Banana", true);
		let c = member("cherry", true);
		let mut items = vec![&c, &a, &b];
		sort_by_name(&mut items, |member| &member.name);
		let names: Vec<&str> = items.iter().map(|member| member.name.as_str()).collect();
		// Uppercase sorts before lowercase in ordinal order.
		assert_eq!(names, ["Banana", "apple", "cherry"]);
	}
}
