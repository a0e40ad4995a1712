use super::Processor;
use crate::support::RenderSupport;
use crate::template::{TemplateResolver, TemplateStore};

/// Renders module documentation into Markdown pages.
pub struct MarkdownProcessor<R = TemplateStore> {
	support: RenderSupport<R>,
}

impl<R: TemplateResolver> MarkdownProcessor<R> {
	/// Format tag and file extension of Markdown output.
	pub const EXTENSION: &'static str = "markdown";

	/// Create a processor resolving templates through `resolver`.
	pub fn new(resolver: R) -> Self {
		Self {
			support: RenderSupport::new(resolver),
		}
	}
}

impl<R: TemplateResolver> Processor for MarkdownProcessor<R> {
	type Resolver = R;

	fn file_extension(&self) -> &'static str {
		Self::EXTENSION
	}

	fn support(&self) -> &RenderSupport<R> {
		&self.support
	}

	fn support_mut(&mut self) -> &mut RenderSupport<R> {
		&mut self.support
	}
}
