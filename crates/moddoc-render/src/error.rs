use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while resolving templates, rendering or writing output.
#[derive(Debug, Error)]
pub enum RenderError {
	/// No template is registered for the requested name and format.
	#[error("no template named '{name}' for format '{format}'")]
	TemplateNotFound {
		/// Template name, e.g. `template` or `index`.
		name: String,
		/// Format tag, e.g. `markdown`.
		format: String,
	},
	/// A template failed to compile.
	#[error("template '{name}' is invalid")]
	Syntax {
		/// Template key.
		name: String,
		/// Compiler error.
		#[source]
		source: minijinja::Error,
	},
	/// A template raised an error while producing output.
	#[error("template '{name}' failed")]
	Invocation {
		/// Template key.
		name: String,
		/// Engine error.
		#[source]
		source: minijinja::Error,
	},
	/// A template override directory or file could not be read.
	#[error("failed to read templates from {}", path.display())]
	TemplateDir {
		/// Path that failed.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// A module name cannot be mapped to a page under the target folder.
	#[error("invalid module name '{name}': {reason}")]
	InvalidModuleName {
		/// Offending module name.
		name: String,
		/// What is wrong with it.
		reason: &'static str,
	},
	/// Rendered output could not be persisted.
	#[error("failed to write {}", path.display())]
	Write {
		/// Output path.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
}

/// Result type returned by renderer helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
