use super::Processor;
use crate::support::RenderSupport;
use crate::template::{TemplateResolver, TemplateStore};

/// Renders module documentation into standalone HTML pages.
pub struct HtmlProcessor<R = TemplateStore> {
	support: RenderSupport<R>,
}

impl<R: TemplateResolver> HtmlProcessor<R> {
	/// Format tag and file extension of HTML output.
	pub const EXTENSION: &'static str = "html";

	/// Create a processor resolving templates through `resolver`.
	pub fn new(resolver: R) -> Self {
		Self {
			support: RenderSupport::new(resolver),
		}
	}
}

impl<R: TemplateResolver> Processor for HtmlProcessor<R> {
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

#[cfg(test)]
mod tests {
	use moddoc_model::ModuleDocumentation;

	use super::*;

	#[test]
	fn doc_text_is_escaped_and_split() {
		let mut processor = HtmlProcessor::new(TemplateStore::new().unwrap());
		let doc = ModuleDocumentation::from_json(
			r#"{
				"name": "acme.html",
				"documentation": "Uses <b>bold.\n\n```\nx < y\n```",
				"functions": [{ "name": "lt", "arguments": ["a", "b"] }]
			}"#,
		)
		.unwrap();
		let page = processor.render(&doc).unwrap();

		assert!(page.contains("<title>acme.html</title>"));
		assert!(page.contains("<p>Uses &lt;b&gt;bold.</p>"));
		assert!(page.contains("<pre><code>x &lt; y</code></pre>"));
		assert!(page.contains("<h3 id=\"function-lt-2\"><code>lt(a, b)</code></h3>"));
	}
}
