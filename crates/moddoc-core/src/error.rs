use thiserror::Error;

/// Aggregate errors produced by the moddoc-core API.
#[derive(Debug, Error)]
pub enum ModdocError {
	/// Errors returned while loading documentation units.
	#[error(transparent)]
	Model(#[from] moddoc_model::ModelError),
	/// Errors emitted while rendering or writing pages.
	#[error(transparent)]
	Render(#[from] moddoc_render::RenderError),
}

/// Result type returned by the moddoc-core library.
pub type Result<T> = std::result::Result<T, ModdocError>;
