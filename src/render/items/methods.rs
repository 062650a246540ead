use crate::model::{Member, Method};

use super::super::link::linked_type_name;
use super::super::state::{RenderState, ordered_members};
use super::member_bullet;

/// Render a method subsection: heading, call signature, parameter bullets,
/// the `Returns:` line when a return type exists, and the description as a
/// separate paragraph.
pub fn render_method(state: &RenderState, method: &Method) -> String {
	let mut output = format!("### {}\n\n", method.name);

	let parameters = ordered_members(&method.parameters);
	output.push_str(&format!("`{}`\n\n", call_signature(&method.name, &parameters)));

	for parameter in &parameters {
		output.push_str(&member_bullet(state.model, parameter));
	}
	if !parameters.is_empty() {
		output.push('\n');
	}

	if let Some(ret) = &method.return_type {
		output.push_str(&format!(
			"Returns: {}\n\n",
			linked_type_name(state.model, &ret.type_ref, ret.is_array)
		));
	}

	if let Some(description) = &method.description
		&& !description.is_empty()
	{
		for line in description.lines() {
			output.push_str(line);
			output.push('\n');
		}
		output.push('\n');
	}

	output
}

/// Build the call signature shown in the method's inline code span.
/// Required parameters render as `name:`, optional ones as `name: nil`;
/// the parenthesized list is omitted entirely when there are no parameters.
fn call_signature(name: &str, parameters: &[&Member]) -> String {
	if parameters.is_empty() {
		return name.to_string();
	}
	let list = parameters
		.iter()
		.map(|parameter| {
			if parameter.is_required {
				format!("{}:", parameter.name)
			} else {
				format!("{}: nil", parameter.name)
			}
		})
		.collect::<Vec<_>>()
		.join(", ");
	format!("{name}({list})")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{PrimitiveKind, TypeRef};

	fn parameter(name: &str, is_required: bool) -> Member {
		Member {
			name: name.to_string(),
			type_ref: TypeRef::Primitive(PrimitiveKind::String),
			is_array: false,
			is_required,
			description: None,
		}
	}

	#[test]
	fn signatures_mark_optional_parameters_with_nil() {
		let id = parameter("id", true);
		let limit = parameter("limit", false);
		assert_eq!(call_signature("getWidget", &[&id]), "getWidget(id:)");
		assert_eq!(
			call_signature("listWidgets", &[&id, &limit]),
			"listWidgets(id:, limit: nil)"
		);
	}

	#[test]
	fn parameterless_signatures_omit_the_list() {
		assert_eq!(call_signature("reset", &[]), "reset");
	}
}
