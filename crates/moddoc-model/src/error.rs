use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading documentation units.
#[derive(Debug, Error)]
pub enum ModelError {
	/// An input file or directory could not be read.
	#[error("failed to read {}", path.display())]
	Read {
		/// Path that failed.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// An input file is not a valid documentation unit.
	#[error("failed to parse {}", path.display())]
	Parse {
		/// Path that failed.
		path: PathBuf,
		/// Underlying JSON error.
		#[source]
		source: serde_json::Error,
	},
}

/// Result type returned by moddoc-model helpers.
pub type Result<T> = std::result::Result<T, ModelError>;
