//! Ordering-law tests: section order, table of contents, and parameters.
mod utils;

use ifacedoc::Renderer;
use ifacedoc::model::ServiceModel;
use utils::*;

/// Byte offsets of each needle within the haystack, asserting presence.
fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
	needles
		.iter()
		.map(|needle| {
			haystack
				.find(needle)
				.unwrap_or_else(|| panic!("expected {needle:?} in:\n{haystack}"))
		})
		.collect()
}

fn assert_in_order(haystack: &str, needles: &[&str]) {
	let found = positions(haystack, needles);
	assert!(
		found.windows(2).all(|pair| pair[0] < pair[1]),
		"expected {needles:?} in order, found offsets {found:?}"
	);
}

#[test]
fn methods_sort_lexicographically_in_toc_and_sections() {
	let model = ServiceModel {
		interfaces: vec![interface(
			"Widgets",
			vec![
				method("updateWidget", Vec::new(), None),
				method("getWidget", Vec::new(), None),
				method("deleteWidget", Vec::new(), None),
			],
		)],
		..ServiceModel::default()
	};

	let content = Renderer::new().generate(&model).remove(0).content;

	assert_in_order(
		&content,
		&[
			"  - [deleteWidget](#deletewidget)",
			"  - [getWidget](#getwidget)",
			"  - [updateWidget](#updatewidget)",
			"### deleteWidget",
			"### getWidget",
			"### updateWidget",
		],
	);
}

#[test]
fn reachable_types_and_enums_sort_by_name() {
	let model = ServiceModel {
		interfaces: vec![interface(
			"Widgets",
			vec![method(
				"getWidget",
				vec![member("mode", named("Mode")), member("kind", named("Kind"))],
				returns(named("Zeta")),
			)],
		)],
		types: vec![
			// Declared out of order; Alpha is only reachable through Zeta.
			type_def("Zeta", vec![member("alpha", named("Alpha"))]),
			type_def("Alpha", Vec::new()),
		],
		enums: vec![enum_def("Mode", &["on"]), enum_def("Kind", &["a"])],
		..ServiceModel::default()
	};

	let content = Renderer::new().generate(&model).remove(0).content;

	assert_in_order(
		&content,
		&[
			"  - [Alpha](#alpha)",
			"  - [Zeta](#zeta)",
			"  - [Kind](#kind)",
			"  - [Mode](#mode)",
			"### Alpha",
			"### Zeta",
			"### Kind",
			"### Mode",
		],
	);
}

#[test]
fn ordering_is_ordinal_not_locale_aware() {
	let model = ServiceModel {
		interfaces: vec![interface(
			"Widgets",
			vec![
				method("zebra", Vec::new(), None),
				method("Apple", Vec::new(), None),
				method("apple", Vec::new(), None),
			],
		)],
		..ServiceModel::default()
	};

	let content = Renderer::new().generate(&model).remove(0).content;

	// Uppercase sorts before lowercase under ordinal comparison.
	assert_in_order(&content, &["### Apple", "### apple", "### zebra"]);
}

#[test]
fn required_parameters_render_before_optional_ones() {
	let model = ServiceModel {
		interfaces: vec![interface(
			"Widgets",
			vec![method(
				"query",
				vec![
					optional_member("optionalA", string()),
					member("requiredB", string()),
					optional_member("optionalC", string()),
					member("requiredD", string()),
				],
				None,
			)],
		)],
		..ServiceModel::default()
	};

	let content = Renderer::new().generate(&model).remove(0).content;

	assert!(content.contains("`query(requiredB:, requiredD:, optionalA: nil, optionalC: nil)`"));
	assert_in_order(
		&content,
		&[
			"- `requiredB` string",
			"- `requiredD` string",
			"- `optionalA` string (optional)",
			"- `optionalC` string (optional)",
		],
	);
}

#[test]
fn toc_anchors_match_section_heading_anchors() {
	let model = widgets_model();
	let content = Renderer::new().generate(&model).remove(0).content;

	// Every TOC entry points at a fragment implied by a rendered heading.
	for (link, heading) in [
		("[Methods](#methods)", "## Methods"),
		("[getWidget](#getwidget)", "### getWidget"),
		("[Types](#types)", "## Types"),
		("[Widget](#widget)", "### Widget"),
	] {
		assert!(content.contains(link), "missing TOC link {link} in:\n{content}");
		assert!(content.contains(heading), "missing heading {heading} in:\n{content}");
	}
}
