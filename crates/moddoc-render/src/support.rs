use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use moddoc_model::{ModuleDocumentation, Symbol, SymbolKind};
use serde::Serialize;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::template::{Template, TemplateResolver};

/// Module entry listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexModule {
	/// Module name.
	pub name: String,
	/// First paragraph of the module documentation.
	pub summary: String,
	/// Page path relative to the target folder.
	pub link: String,
}

/// Symbol entry listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSymbol {
	/// Symbol name.
	pub name: String,
	/// Symbol kind.
	pub kind: SymbolKind,
	/// Module defining the symbol.
	pub module: String,
	/// Page path and anchor relative to the target folder.
	pub link: String,
}

/// Root context handed to index templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexContext {
	/// Registered modules sorted by name.
	pub modules: Vec<IndexModule>,
	/// Symbols of every registered module, sorted by name.
	pub symbols: Vec<IndexSymbol>,
}

/// What the index keeps about a registered module.
#[derive(Debug, Clone)]
struct Registered {
	stem: String,
	summary: String,
	symbols: Vec<Symbol>,
}

impl Registered {
	fn new(name: &str, doc: &ModuleDocumentation) -> Result<Self> {
		Ok(Self {
			stem: module_stem(name)?,
			summary: doc.summary(),
			symbols: doc.symbols(),
		})
	}
}

/// Characters a name segment may not contain.
const RESERVED: [char; 4] = ['/', '\\', ':', '\0'];

/// Page path of `name` without extension. Each dot-separated segment is one directory
/// level, so distinct valid names never share a page.
fn module_stem(name: &str) -> Result<String> {
	let invalid = |reason| RenderError::InvalidModuleName {
		name: name.to_string(),
		reason,
	};
	if name.is_empty() {
		return Err(invalid("name is empty"));
	}
	for segment in name.split('.') {
		if segment.is_empty() {
			return Err(invalid("empty segment between dots"));
		}
		if segment.contains(RESERVED) {
			return Err(invalid("segment contains a path separator"));
		}
	}
	Ok(name.replace('.', "/"))
}

/// Path of a module page relative to the target folder, with `/` separators.
///
/// Fails with [`RenderError::InvalidModuleName`] for empty names, leading, trailing or
/// doubled dots, and segments holding `/`, `\`, `:` or NUL.
pub fn module_link(name: &str, extension: &str) -> Result<String> {
	Ok(format!("{}.{extension}", module_stem(name)?))
}

/// Write `content` to `path`, creating parent directories and replacing any existing file.
pub fn write_text(content: &str, path: &Path) -> Result<()> {
	let write_error = |source| RenderError::Write {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).map_err(write_error)?;
	}
	fs::write(path, content).map_err(write_error)?;
	debug!(path = %path.display(), bytes = content.len(), "wrote output file");
	Ok(())
}

/// Shared machinery behind every output format: template lookup, target folder, output
/// paths, module registration and the index page.
pub struct RenderSupport<R> {
	resolver: R,
	target_folder: PathBuf,
	modules: BTreeMap<String, Registered>,
}

impl<R: TemplateResolver> RenderSupport<R> {
	/// Create support state around a template resolver. The target folder defaults to the
	/// current directory.
	pub fn new(resolver: R) -> Self {
		Self {
			resolver,
			target_folder: PathBuf::new(),
			modules: BTreeMap::new(),
		}
	}

	/// The template resolver.
	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	/// Set the folder every output file is written under.
	pub fn set_target_folder(&mut self, target_folder: impl Into<PathBuf>) {
		self.target_folder = target_folder.into();
	}

	/// The folder every output file is written under.
	pub fn target_folder(&self) -> &Path {
		&self.target_folder
	}

	/// Output path for the document `name`: dots become directory separators and the
	/// format extension is appended. The path always stays under the target folder.
	pub fn output_file(&self, name: &str, extension: &str) -> Result<PathBuf> {
		Ok(self.target_folder.join(module_link(name, extension)?))
	}

	/// Resolve the template `name` for `format`.
	pub fn template(&self, name: &str, format: &str) -> Result<Template<'_>> {
		self.resolver.resolve(name, format)
	}

	/// Record `doc` for the index under `name`. A later registration under the same name
	/// replaces the earlier one.
	pub fn register(&mut self, name: &str, doc: &ModuleDocumentation) -> Result<()> {
		self.modules.insert(name.to_string(), Registered::new(name, doc)?);
		Ok(())
	}

	/// Names of the registered modules, sorted.
	pub fn registered(&self) -> impl Iterator<Item = &str> {
		self.modules.keys().map(String::as_str)
	}

	/// Render one module page: resolve the template, register the module under `name`,
	/// then invoke the template with the module as its only argument.
	pub fn render_module(
		&mut self,
		template_name: &str,
		format: &str,
		name: &str,
		doc: &ModuleDocumentation,
	) -> Result<String> {
		let template = self.resolver.resolve(template_name, format)?;
		// `template` borrows the resolver, so register through the field directly.
		self.modules.insert(name.to_string(), Registered::new(name, doc)?);
		template.render(doc)
	}

	/// Build the index context from the registered modules.
	pub fn index_context(&self, extension: &str) -> IndexContext {
		let mut context = IndexContext::default();
		for (name, registered) in &self.modules {
			let link = format!("{}.{extension}", registered.stem);
			context.modules.push(IndexModule {
				name: name.clone(),
				summary: registered.summary.clone(),
				link: link.clone(),
			});
			context
				.symbols
				.extend(registered.symbols.iter().map(|symbol| IndexSymbol {
					name: symbol.name.clone(),
					kind: symbol.kind,
					module: name.clone(),
					link: format!("{link}#{}", symbol.anchor),
				}));
		}
		context.symbols.sort_by(|a, b| {
			a.name
				.to_lowercase()
				.cmp(&b.name.to_lowercase())
				.then_with(|| a.module.cmp(&b.module))
				.then_with(|| a.kind.cmp(&b.kind))
		});
		context
	}

	/// Render the index template `name` for `format` and write it next to the module
	/// pages. Returns the written path.
	pub fn render_index(&self, name: &str, format: &str) -> Result<PathBuf> {
		let template = self.resolver.resolve(name, format)?;
		let rendered = template.render(&self.index_context(format))?;
		let path = self.output_file(name, format)?;
		write_text(&rendered, &path)?;
		Ok(path)
	}
}
