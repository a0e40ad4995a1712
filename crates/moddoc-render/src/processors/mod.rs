use std::path::{Path, PathBuf};

use moddoc_model::{ModuleDocumentation, ModuleMap};
use tracing::debug;

use crate::error::Result;
use crate::support::{RenderSupport, write_text};
use crate::template::TemplateResolver;

/// HTML output.
pub mod html;
/// Markdown output.
pub mod markdown;

pub use self::html::HtmlProcessor;
pub use self::markdown::MarkdownProcessor;

/// Name of the per-module template.
pub const TEMPLATE: &str = "template";
/// Name of the index template and of the index output file.
pub const INDEX: &str = "index";

/// An output format: renders documentation units through its templates and writes one
/// file per module plus the index.
pub trait Processor {
	/// Template source used by this processor.
	type Resolver: TemplateResolver;

	/// Format tag. Selects the template variant and is the output file extension.
	fn file_extension(&self) -> &'static str;

	/// Shared render state.
	fn support(&self) -> &RenderSupport<Self::Resolver>;

	/// Shared render state, mutably.
	fn support_mut(&mut self) -> &mut RenderSupport<Self::Resolver>;

	/// Render one module page.
	///
	/// Resolves the `template` template for this format, registers the module for the
	/// index under its own name and invokes the template with the module. Errors are
	/// returned unchanged.
	fn render(&mut self, doc: &ModuleDocumentation) -> Result<String> {
		self.render_as(doc.module_name(), doc)
	}

	/// Render one module page, listing it in the index under `name`.
	fn render_as(&mut self, name: &str, doc: &ModuleDocumentation) -> Result<String> {
		let extension = self.file_extension();
		self.support_mut().render_module(TEMPLATE, extension, name, doc)
	}

	/// Render every module into `target_folder`, then the index.
	///
	/// Every name is mapped to its page before anything is written, so an invalid module
	/// name leaves the target untouched. After that the run stops at the first failure;
	/// pages written before it stay on disk and the index is not written. On success
	/// returns the written paths, index last.
	fn process(&mut self, modules: &ModuleMap, target_folder: &Path) -> Result<Vec<PathBuf>> {
		let extension = self.file_extension();
		self.support_mut().set_target_folder(target_folder);

		let pages = modules
			.iter()
			.map(|(name, doc)| {
				self.support()
					.output_file(name, extension)
					.map(|path| (name, doc, path))
			})
			.collect::<Result<Vec<_>>>()?;

		let mut written = Vec::with_capacity(pages.len() + 1);
		for (name, doc, path) in pages {
			let rendered = self.render_as(name, doc)?;
			write_text(&rendered, &path)?;
			written.push(path);
		}
		written.push(self.support().render_index(INDEX, extension)?);

		debug!(
			format = extension,
			modules = modules.len(),
			target = %target_folder.display(),
			"rendered documentation"
		);
		Ok(written)
	}
}
