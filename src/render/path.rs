//! Output path resolution for generated documents.

/// Map an interface and the configured namespace to an ordered list of
/// path segments ending in the document file name. Namespace segments and
/// the file stem are lowercased so paths match the anchor convention and
/// stay portable across case-insensitive filesystems.
pub fn output_path(namespace: Option<&str>, interface_name: &str) -> Vec<String> {
	let mut segments: Vec<String> = namespace
		.map(|namespace| {
			namespace
				.split("::")
				.filter(|segment| !segment.is_empty())
				.map(str::to_lowercase)
				.collect()
		})
		.unwrap_or_default();
	segments.push(format!("{}.md", interface_name.to_lowercase()));
	segments
}
