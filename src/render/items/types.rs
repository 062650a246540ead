use crate::model::TypeDef;

use super::super::state::RenderState;
use super::member_bullet;

/// Render a composite type subsection: heading, fully-qualified name in an
/// inline code span, optional description, and one bullet per property in
/// declaration order.
pub fn render_type(state: &RenderState, ty: &TypeDef) -> String {
	let mut output = format!("### {}\n\n", ty.name);
	output.push_str(&format!("`{}`\n\n", state.qualified(&ty.name)));

	if let Some(description) = &ty.description
		&& !description.is_empty()
	{
		for line in description.lines() {
			output.push_str(line);
			output.push('\n');
		}
		output.push('\n');
	}

	for property in &ty.properties {
		output.push_str(&member_bullet(state.model, property));
	}
	if !ty.properties.is_empty() {
		output.push('\n');
	}

	output
}
