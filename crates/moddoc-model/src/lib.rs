//! Documentation model consumed by the moddoc renderers.
//!
//! A [`ModuleDocumentation`] describes the public surface of one module: its doc text,
//! imports, functions, structs, unions and augmentations. Units are produced by an external
//! extractor, handed over as JSON and are never mutated while rendering.

/// Stable fragment identifiers for documented symbols.
pub mod anchor;
/// Errors raised while reading documentation units.
pub mod error;
/// Loading documentation units from JSON files and directories.
pub mod load;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::anchor::{anchor, slug};
pub use crate::error::{ModelError, Result};
pub use crate::load::{collect_modules, load_path};

/// Documentation units keyed by module name.
pub type ModuleMap = BTreeMap<String, ModuleDocumentation>;

/// Extracted documentation for a single module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleDocumentation {
	/// Dotted module name, e.g. `acme.text.Strings`.
	pub name: String,
	/// Module-level documentation text.
	pub documentation: String,
	/// Modules imported by this module.
	pub imports: Vec<String>,
	/// Functions defined at module level.
	pub functions: Vec<FunctionDoc>,
	/// Struct definitions.
	pub structs: Vec<StructDoc>,
	/// Union definitions.
	pub unions: Vec<UnionDoc>,
	/// Augmentations applied directly to a target type.
	pub augmentations: Vec<AugmentationDoc>,
	/// Named, reusable augmentations.
	pub named_augmentations: Vec<AugmentationDoc>,
	/// Names of module-level state definitions.
	pub states: Vec<String>,
}

/// A module-level or augmentation function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDoc {
	/// Function name.
	pub name: String,
	/// Argument names in declaration order.
	pub arguments: Vec<String>,
	/// Whether the last argument is variadic.
	pub varargs: bool,
	/// Module-private functions are left out of rendered pages.
	pub local: bool,
	/// Documentation text.
	pub documentation: String,
}

/// A struct definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructDoc {
	/// Struct name.
	pub name: String,
	/// Member names.
	pub members: Vec<String>,
	/// Documentation text.
	pub documentation: String,
}

/// A union definition and its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnionDoc {
	/// Union name.
	pub name: String,
	/// Union values.
	pub values: Vec<UnionValueDoc>,
	/// Documentation text.
	pub documentation: String,
}

/// One value of a union.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnionValueDoc {
	/// Value name.
	pub name: String,
	/// Member names carried by the value.
	pub members: Vec<String>,
	/// Documentation text.
	pub documentation: String,
}

/// An augmentation: a set of functions attached to a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationDoc {
	/// Augmented type, or the augmentation's own name when it is a named augmentation.
	pub target: String,
	/// Functions provided by the augmentation.
	pub functions: Vec<FunctionDoc>,
	/// Named augmentations applied to the target.
	pub augmentations: Vec<String>,
	/// Documentation text.
	pub documentation: String,
}

/// Kinds of symbols listed in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
	/// A module-level function.
	Function,
	/// A struct.
	Struct,
	/// A union.
	Union,
	/// An augmentation of a type.
	Augmentation,
	/// A named augmentation.
	NamedAugmentation,
}

impl SymbolKind {
	/// Short label used in anchors and index listings.
	pub fn label(self) -> &'static str {
		match self {
			Self::Function => "function",
			Self::Struct => "struct",
			Self::Union => "union",
			Self::Augmentation => "augmentation",
			Self::NamedAugmentation => "named-augmentation",
		}
	}
}

/// A documented symbol with its in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
	/// Display name.
	pub name: String,
	/// Kind of symbol.
	pub kind: SymbolKind,
	/// Fragment identifier within the module page.
	pub anchor: String,
}

impl Symbol {
	fn new(kind: SymbolKind, name: &str, arity: Option<usize>) -> Self {
		Self {
			name: name.to_string(),
			kind,
			anchor: anchor(kind.label(), name, arity),
		}
	}
}

impl ModuleDocumentation {
	/// Parse a single unit from JSON text.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// The module name, as used for output paths and the index.
	pub fn module_name(&self) -> &str {
		&self.name
	}

	/// First paragraph of the module documentation, joined into one line.
	pub fn summary(&self) -> String {
		self.documentation
			.lines()
			.map(str::trim)
			.skip_while(|line| line.is_empty())
			.take_while(|line| !line.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Functions visible outside the module.
	pub fn exported_functions(&self) -> impl Iterator<Item = &FunctionDoc> {
		self.functions.iter().filter(|function| !function.local)
	}

	/// Every symbol that gets its own section on the module page.
	pub fn symbols(&self) -> Vec<Symbol> {
		let mut symbols = Vec::new();
		for function in self.exported_functions() {
			symbols.push(Symbol::new(
				SymbolKind::Function,
				&function.name,
				Some(function.arguments.len()),
			));
		}
		for item in &self.structs {
			symbols.push(Symbol::new(SymbolKind::Struct, &item.name, None));
		}
		for item in &self.unions {
			symbols.push(Symbol::new(SymbolKind::Union, &item.name, None));
		}
		for item in &self.augmentations {
			symbols.push(Symbol::new(SymbolKind::Augmentation, &item.target, None));
		}
		for item in &self.named_augmentations {
			symbols.push(Symbol::new(
				SymbolKind::NamedAugmentation,
				&item.target,
				None,
			));
		}
		symbols
	}
}
