//! Section renderers for the three entity families of a document.

/// Enumeration subsection rendering.
pub mod enums;
/// Method subsection rendering.
pub mod methods;
/// Composite type subsection rendering.
pub mod types;

pub use enums::render_enum;
pub use methods::render_method;
pub use types::render_type;

use crate::model::{EnumDef, Member, Method, ServiceModel, TypeDef};

use super::link::{anchor, linked_type_name};

/// Render the table of contents. It mirrors the three collections' order
/// and content: one group bullet per non-empty family, one indented bullet
/// per entity, each pointing at the anchor implied by the entity's own
/// section heading.
pub fn render_contents(methods: &[&Method], types: &[&TypeDef], enums: &[&EnumDef]) -> String {
	let mut output = String::from("## Contents\n\n");
	let empty_mark = output.len();

	contents_group(&mut output, "Methods", methods.iter().map(|method| method.name.as_str()));
	contents_group(&mut output, "Types", types.iter().map(|ty| ty.name.as_str()));
	contents_group(&mut output, "Enums", enums.iter().map(|en| en.name.as_str()));

	if output.len() > empty_mark {
		output.push('\n');
	}
	output
}

fn contents_group<'n>(output: &mut String, label: &str, names: impl Iterator<Item = &'n str>) {
	let mut names = names.peekable();
	if names.peek().is_none() {
		return;
	}
	output.push_str(&format!("- [{label}]({})\n", anchor(label)));
	for name in names {
		output.push_str(&format!("  - [{name}]({})\n", anchor(name)));
	}
}

/// Render the bullet line shared by method parameters and type properties:
/// backticked name, linked type, an `(optional)` suffix when the member is
/// not required, and the description when present.
pub(crate) fn member_bullet(model: &ServiceModel, member: &Member) -> String {
	let mut line = format!(
		"- `{}` {}",
		member.name,
		linked_type_name(model, &member.type_ref, member.is_array)
	);
	if !member.is_required {
		line.push_str(" (optional)");
	}
	if let Some(description) = &member.description
		&& !description.is_empty()
	{
		line.push_str(" - ");
		line.push_str(&description.joined());
	}
	line.push('\n');
	line
}
