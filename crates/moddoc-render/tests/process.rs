//! Integration tests covering whole processing runs against a scratch directory.
use std::fs;
use std::path::{Path, PathBuf};

use moddoc_model::{ModuleDocumentation, ModuleMap};
use moddoc_render::{
	HtmlProcessor, MarkdownProcessor, Processor, RenderError, Result, Template,
	TemplateResolver, TemplateStore,
};
use pretty_assertions::assert_eq;

/// Resolver without any templates.
struct NoTemplates;

impl TemplateResolver for NoTemplates {
	fn resolve(&self, name: &str, format: &str) -> Result<Template<'_>> {
		Err(RenderError::TemplateNotFound {
			name: name.to_string(),
			format: format.to_string(),
		})
	}
}

fn modules(names: &[&str]) -> ModuleMap {
	names
		.iter()
		.map(|name| {
			let doc = ModuleDocumentation::from_json(&format!(
				r#"{{ "name": "{name}", "documentation": "About {name}.", "functions": [{{ "name": "run" }}] }}"#
			))
			.unwrap();
			(name.to_string(), doc)
		})
		.collect()
}

/// Every file under `root`, relative and sorted.
fn files_under(root: &Path) -> Vec<String> {
	fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
		let Ok(entries) = fs::read_dir(dir) else {
			return;
		};
		for entry in entries {
			let path = entry.unwrap().path();
			if path.is_dir() {
				walk(&path, root, out);
			} else {
				let relative = path.strip_prefix(root).unwrap();
				out.push(relative.to_string_lossy().replace('\\', "/"));
			}
		}
	}
	let mut out = Vec::new();
	walk(root, root, &mut out);
	out.sort();
	out
}

#[test]
fn writes_one_page_per_module_plus_index() {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("out");
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	let written = processor
		.process(&modules(&["a.b", "c.d"]), &target)
		.unwrap();

	assert_eq!(
		written,
		vec![
			target.join("a/b.markdown"),
			target.join("c/d.markdown"),
			target.join("index.markdown"),
		]
	);
	assert_eq!(
		files_under(&target),
		vec!["a/b.markdown", "c/d.markdown", "index.markdown"]
	);
	for path in &written {
		assert!(!fs::read_to_string(path).unwrap().trim().is_empty());
	}
}

#[test]
fn index_links_modules_and_symbols() {
	let dir = tempfile::tempdir().unwrap();
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());
	processor
		.process(&modules(&["a.b", "c"]), dir.path())
		.unwrap();

	let index = fs::read_to_string(dir.path().join("index.markdown")).unwrap();
	assert!(index.contains("* [a.b](a/b.markdown): About a.b."));
	assert!(index.contains("* [c](c.markdown): About c."));
	assert!(index.contains("* [`run`](a/b.markdown#function-run-0) (function in `a.b`)"));
	assert!(index.contains("* [`run`](c.markdown#function-run-0) (function in `c`)"));
}

#[test]
fn empty_collection_still_writes_the_index() {
	let dir = tempfile::tempdir().unwrap();
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	let written = processor.process(&ModuleMap::new(), dir.path()).unwrap();

	assert_eq!(written, vec![dir.path().join("index.markdown")]);
	assert_eq!(files_under(dir.path()), vec!["index.markdown"]);
	let index = fs::read_to_string(&written[0]).unwrap();
	assert!(index.contains("No modules were documented."));
}

#[test]
fn missing_templates_write_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let mut processor = MarkdownProcessor::new(NoTemplates);

	let err = processor
		.process(&modules(&["a", "b"]), dir.path())
		.unwrap_err();

	assert!(matches!(err, RenderError::TemplateNotFound { ref name, .. } if name == "template"));
	assert!(files_under(dir.path()).is_empty());
}

#[test]
fn invocation_failure_stops_the_run() {
	let dir = tempfile::tempdir().unwrap();
	let mut store = TemplateStore::empty();
	store
		.add_template(
			"template",
			"markdown",
			"{% if name == 'b' %}{{ no_such_field }}{% endif %}page {{ name }}".into(),
		)
		.unwrap();
	store
		.add_template("index", "markdown", "index".into())
		.unwrap();
	let mut processor = MarkdownProcessor::new(store);

	let err = processor
		.process(&modules(&["a", "b", "c"]), dir.path())
		.unwrap_err();

	assert!(matches!(err, RenderError::Invocation { .. }));
	assert_eq!(files_under(dir.path()), vec!["a.markdown"]);
	assert_eq!(
		fs::read_to_string(dir.path().join("a.markdown")).unwrap(),
		"page a"
	);
}

#[test]
fn write_failure_keeps_earlier_pages() {
	let dir = tempfile::tempdir().unwrap();
	// A plain file where `b.y` needs a directory.
	fs::write(dir.path().join("b"), "in the way").unwrap();
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	let err = processor
		.process(&modules(&["a.x", "b.y"]), dir.path())
		.unwrap_err();

	let RenderError::Write { path, .. } = &err else {
		panic!("expected a write error, got {err:?}");
	};
	assert_eq!(path, &dir.path().join("b/y.markdown"));
	assert!(dir.path().join("a/x.markdown").is_file());
	assert!(!dir.path().join("index.markdown").exists());
}

#[test]
fn render_is_idempotent() {
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());
	let docs = modules(&["same"]);
	let first = processor.render(&docs["same"]).unwrap();
	let second = processor.render(&docs["same"]).unwrap();
	assert_eq!(first, second);
}

#[test]
fn existing_pages_are_overwritten() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("a.markdown"), "stale").unwrap();
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	processor.process(&modules(&["a"]), dir.path()).unwrap();

	let page = fs::read_to_string(dir.path().join("a.markdown")).unwrap();
	assert!(page.starts_with("# Documentation for `a`"));
}

#[test]
fn html_run_uses_html_extension() {
	let dir = tempfile::tempdir().unwrap();
	let mut processor = HtmlProcessor::new(TemplateStore::new().unwrap());

	let written: Vec<PathBuf> = processor
		.process(&modules(&["x.y"]), dir.path())
		.unwrap();

	assert_eq!(files_under(dir.path()), vec!["index.html", "x/y.html"]);
	assert_eq!(written.last(), Some(&dir.path().join("index.html")));
	let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
	assert!(index.contains(">x.y</a>"));
}

#[test]
fn pages_and_index_links_follow_the_collection_key() {
	let dir = tempfile::tempdir().unwrap();
	let mut modules = ModuleMap::new();
	modules.insert(
		"key.name".to_string(),
		ModuleDocumentation::from_json(r#"{ "name": "real.name", "documentation": "Keyed." }"#)
			.unwrap(),
	);
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	processor.process(&modules, dir.path()).unwrap();

	assert_eq!(
		files_under(dir.path()),
		vec!["index.markdown", "key/name.markdown"]
	);
	let index = fs::read_to_string(dir.path().join("index.markdown")).unwrap();
	assert!(index.contains("* [key.name](key/name.markdown): Keyed."));
	assert!(!index.contains("real/name.markdown"));
}

#[test]
fn invalid_module_names_write_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("out");
	for name in [".escaped", "a..b", "a/b", ""] {
		let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

		let err = processor
			.process(&modules(&["fine", name]), &target)
			.unwrap_err();

		assert!(
			matches!(err, RenderError::InvalidModuleName { name: ref rejected, .. } if rejected == name),
			"{name:?} was accepted"
		);
		assert!(files_under(dir.path()).is_empty(), "{name:?} wrote files");
	}
}

#[test]
fn sibling_names_never_share_a_page() {
	let dir = tempfile::tempdir().unwrap();
	let names = ["a", "a.b", "a.b.c", "ab", "b.a"];
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	let written = processor.process(&modules(&names), dir.path()).unwrap();

	assert_eq!(written.len(), names.len() + 1);
	assert!(written.iter().all(|path| path.starts_with(dir.path())));
	assert_eq!(
		files_under(dir.path()),
		vec![
			"a.markdown",
			"a/b.markdown",
			"a/b/c.markdown",
			"ab.markdown",
			"b/a.markdown",
			"index.markdown",
		]
	);
	for name in names {
		let page = fs::read_to_string(dir.path().join(format!(
			"{}.markdown",
			name.replace('.', "/")
		)))
		.unwrap();
		assert!(page.starts_with(&format!("# Documentation for `{name}`")));
	}
}

#[test]
fn module_named_index_is_replaced_by_the_index() {
	let dir = tempfile::tempdir().unwrap();
	let mut processor = MarkdownProcessor::new(TemplateStore::new().unwrap());

	let written = processor
		.process(&modules(&["index", "other"]), dir.path())
		.unwrap();

	let index_path = dir.path().join("index.markdown");
	assert_eq!(
		written,
		vec![
			index_path.clone(),
			dir.path().join("other.markdown"),
			index_path.clone(),
		]
	);
	let index = fs::read_to_string(&index_path).unwrap();
	assert!(index.starts_with("# Modules index"));
	assert!(index.contains("* [index](index.markdown): About index."));
}
