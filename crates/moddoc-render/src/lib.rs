//! Rendering logic that turns documentation units into per-module pages and an index.
//!
//! Each output format is a [`Processor`]. A processor owns a [`RenderSupport`], which
//! resolves templates through a [`TemplateResolver`], computes output paths under the
//! target folder, keeps track of rendered modules and writes the index page.

/// Domain-specific errors for the renderer.
pub mod error;
/// Output formats.
pub mod processors;
/// Target folder, output paths, registration and index rendering.
pub mod support;
/// Template resolution and the built-in template store.
pub mod template;
/// Clean-up helpers for documentation text.
pub mod text;

// Re-export public API
pub use crate::error::{RenderError, Result};
pub use crate::processors::{HtmlProcessor, INDEX, MarkdownProcessor, Processor, TEMPLATE};
pub use crate::support::{IndexContext, IndexModule, IndexSymbol, RenderSupport, write_text};
pub use crate::template::{Template, TemplateResolver, TemplateStore};
