use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase `name` and collapse every run of characters outside `[a-z0-9]` into `-`.
pub fn slug(name: &str) -> String {
	let lowered = name.to_lowercase();
	NON_SLUG
		.replace_all(&lowered, "-")
		.trim_matches('-')
		.to_string()
}

/// Fragment identifier for a symbol of `kind` named `name`.
///
/// Functions pass their arity so that overloads by argument count get distinct anchors.
pub fn anchor(kind: &str, name: &str, arity: Option<usize>) -> String {
	let slug = slug(name);
	match (slug.is_empty(), arity) {
		(true, Some(arity)) => format!("{kind}-{arity}"),
		(true, None) => kind.to_string(),
		(false, Some(arity)) => format!("{kind}-{slug}-{arity}"),
		(false, None) => format!("{kind}-{slug}"),
	}
}
