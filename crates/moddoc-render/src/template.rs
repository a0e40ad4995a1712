use std::fs;
use std::path::Path;

use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use serde::Serialize;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::text;

/// Built-in templates, keyed by `<name>.<format>`.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
	(
		"template.markdown",
		include_str!("../templates/template.markdown"),
	),
	("index.markdown", include_str!("../templates/index.markdown")),
	("template.html", include_str!("../templates/template.html")),
	("index.html", include_str!("../templates/index.html")),
];

/// Lookup key for a template name and format tag.
pub fn template_key(name: &str, format: &str) -> String {
	format!("{name}.{format}")
}

/// A compiled template, ready to render a serializable value into a string.
pub struct Template<'env> {
	name: String,
	inner: minijinja::Template<'env, 'env>,
}

impl<'env> Template<'env> {
	/// Wrap a compiled template under its lookup key.
	pub fn new(name: impl Into<String>, inner: minijinja::Template<'env, 'env>) -> Self {
		Self {
			name: name.into(),
			inner,
		}
	}

	/// Lookup key this template was resolved under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Render `value` as the template's root context.
	pub fn render<S: Serialize>(&self, value: &S) -> Result<String> {
		self.inner
			.render(value)
			.map_err(|source| RenderError::Invocation {
				name: self.name.clone(),
				source,
			})
	}
}

/// Source of templates for an output format.
pub trait TemplateResolver {
	/// Resolve the template `name` for the output `format`.
	fn resolve(&self, name: &str, format: &str) -> Result<Template<'_>>;
}

impl<R: TemplateResolver + ?Sized> TemplateResolver for &R {
	fn resolve(&self, name: &str, format: &str) -> Result<Template<'_>> {
		(**self).resolve(name, format)
	}
}

/// Template resolver backed by a `minijinja` environment holding the built-in templates
/// and any overrides.
#[derive(Debug)]
pub struct TemplateStore {
	env: Environment<'static>,
}

impl TemplateStore {
	/// Create a store holding only the built-in templates.
	pub fn new() -> Result<Self> {
		let mut store = Self::empty();
		for &(key, template) in BUILTIN_TEMPLATES {
			store
				.env
				.add_template(key, template)
				.map_err(|source| RenderError::Syntax {
					name: key.to_string(),
					source,
				})?;
		}
		Ok(store)
	}

	/// Create a store without any templates, with helpers registered.
	pub fn empty() -> Self {
		let mut env = Environment::new();
		env.set_undefined_behavior(UndefinedBehavior::Strict);
		env.set_trim_blocks(true);
		env.set_lstrip_blocks(true);
		env.add_function("anchor", anchor);
		env.add_filter("markdown_doc", markdown_doc);
		env.add_filter("paragraphs", paragraphs);
		Self { env }
	}

	/// Add or replace the template `name` for `format`.
	pub fn add_template(&mut self, name: &str, format: &str, source: String) -> Result<()> {
		let key = template_key(name, format);
		self.env
			.add_template_owned(key.clone(), source)
			.map_err(|source| RenderError::Syntax { name: key, source })
	}

	/// Load every `<name>.<format>` file found directly in `dir`, replacing built-ins with
	/// the same key.
	pub fn with_overrides(mut self, dir: &Path) -> Result<Self> {
		let read_error = |path: &Path| {
			let path = path.to_path_buf();
			move |source| RenderError::TemplateDir { path, source }
		};

		let mut files = Vec::new();
		for entry in fs::read_dir(dir).map_err(read_error(dir))? {
			let path = entry.map_err(read_error(dir))?.path();
			if path.is_file() {
				files.push(path);
			}
		}
		files.sort();

		for path in files {
			let Some((name, format)) = path
				.file_name()
				.and_then(|file| file.to_str())
				.and_then(|file| file.rsplit_once('.'))
			else {
				debug!(path = %path.display(), "skipping file without a format extension");
				continue;
			};
			let source = fs::read_to_string(&path).map_err(read_error(&path))?;
			debug!(template = %template_key(name, format), path = %path.display(), "loaded template override");
			self.add_template(name, format, source)?;
		}
		Ok(self)
	}
}

impl TemplateResolver for TemplateStore {
	fn resolve(&self, name: &str, format: &str) -> Result<Template<'_>> {
		let key = template_key(name, format);
		match self.env.get_template(&key) {
			Ok(inner) => Ok(Template::new(key, inner)),
			Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
				Err(RenderError::TemplateNotFound {
					name: name.to_string(),
					format: format.to_string(),
				})
			}
			Err(source) => Err(RenderError::Syntax { name: key, source }),
		}
	}
}

fn anchor(kind: &str, name: &str, arity: Option<usize>) -> String {
	moddoc_model::anchor(kind, name, arity)
}

fn markdown_doc(value: &str) -> String {
	text::markdown_doc(value)
}

fn paragraphs(value: &str) -> Value {
	Value::from_serialize(text::paragraphs(value))
}
