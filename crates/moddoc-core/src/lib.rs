//! Core library for moddoc, providing the main API for rendering module documentation.
//!
//! This crate provides the high-level [`Moddoc`] API which loads documentation units, picks
//! the processor for the configured output format and renders one page per module plus
//! the index. It is UI-agnostic and can be used by any frontend.

/// Error helpers for the core API.
pub mod error;

use std::path::{Path, PathBuf};

pub use moddoc_model::{ModuleDocumentation, ModuleMap};
use moddoc_model::{collect_modules, load_path};
use moddoc_render::{HtmlProcessor, MarkdownProcessor, Processor, TemplateStore};
use tracing::{debug, info};

pub use crate::error::{ModdocError, Result};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
	/// One Markdown page per module (default).
	#[default]
	Markdown,
	/// One standalone HTML page per module.
	Html,
}

impl RenderFormat {
	/// Format tag, also used as the output file extension.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Markdown => MarkdownProcessor::<TemplateStore>::EXTENSION,
			Self::Html => HtmlProcessor::<TemplateStore>::EXTENSION,
		}
	}
}

/// Moddoc renders extracted module documentation into a folder of pages.
///
/// Input is one or more JSON files (or directories of them) holding documentation units.
/// Every module gets its own page, named after the module with dots turned into
/// directories, and an `index` page links them all together.
#[derive(Debug, Clone, Default)]
pub struct Moddoc {
	/// Output format to render.
	format: RenderFormat,

	/// Folder holding template overrides.
	template_dir: Option<PathBuf>,

	/// Whether to suppress progress logging.
	silent: bool,
}

impl Moddoc {
	/// Creates a new Moddoc instance rendering Markdown with the built-in templates.
	pub fn new() -> Self {
		Self::default()
	}

	/// Selects the output format.
	pub fn with_format(mut self, format: RenderFormat) -> Self {
		self.format = format;
		self
	}

	/// Loads `<name>.<format>` template overrides from `dir` before rendering.
	pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.template_dir = Some(dir.into());
		self
	}

	/// Enables or disables silent mode, which suppresses progress logging.
	pub fn with_silent(mut self, silent: bool) -> Self {
		self.silent = silent;
		self
	}

	/// The configured output format.
	pub fn format(&self) -> RenderFormat {
		self.format
	}

	/// Loads every input path into a module collection keyed by module name.
	///
	/// A module defined more than once keeps its last definition.
	pub fn load<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<ModuleMap> {
		let mut units = Vec::new();
		for input in inputs {
			units.extend(load_path(input.as_ref())?);
		}
		let modules = collect_modules(units);
		debug!(modules = modules.len(), "collected documentation units");
		Ok(modules)
	}

	/// Renders `modules` into `target`, returning the written paths with the index last.
	pub fn process(&self, modules: &ModuleMap, target: &Path) -> Result<Vec<PathBuf>> {
		let store = self.template_store()?;
		let written = match self.format {
			RenderFormat::Markdown => MarkdownProcessor::new(store).process(modules, target)?,
			RenderFormat::Html => HtmlProcessor::new(store).process(modules, target)?,
		};

		if !self.silent {
			info!(
				files = written.len(),
				target = %target.display(),
				"documentation generated"
			);
		}
		Ok(written)
	}

	/// Loads `inputs` and renders them into `target`.
	pub fn generate<P: AsRef<Path>>(&self, inputs: &[P], target: &Path) -> Result<Vec<PathBuf>> {
		let modules = self.load(inputs)?;
		self.process(&modules, target)
	}

	fn template_store(&self) -> Result<TemplateStore> {
		let store = TemplateStore::new()?;
		Ok(match &self.template_dir {
			Some(dir) => store.with_overrides(dir)?,
			None => store,
		})
	}
}
