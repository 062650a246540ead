use crate::model::EnumDef;

use super::super::state::RenderState;

/// Render an enumeration subsection: heading, fully-qualified name in an
/// inline code span, and one backticked bullet per literal value in
/// declaration order.
pub fn render_enum(state: &RenderState, en: &EnumDef) -> String {
	let mut output = format!("### {}\n\n", en.name);
	output.push_str(&format!("`{}`\n\n", state.qualified(&en.name)));

	for value in &en.values {
		output.push_str(&format!("- `{value}`\n"));
	}
	if !en.values.is_empty() {
		output.push('\n');
	}

	output
}
