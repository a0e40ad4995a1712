use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ModelError, Result};
use crate::{ModuleDocumentation, ModuleMap};

/// A JSON document holding either one unit or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Units {
	Many(Vec<ModuleDocumentation>),
	One(Box<ModuleDocumentation>),
}

/// Load documentation units from a JSON file or a directory of JSON files.
///
/// Directories are read non-recursively; only entries with a `.json` extension are
/// considered, in file-name order.
pub fn load_path(path: &Path) -> Result<Vec<ModuleDocumentation>> {
	if path.is_dir() {
		let mut units = Vec::new();
		for file in json_files(path)? {
			units.extend(load_file(&file)?);
		}
		Ok(units)
	} else {
		load_file(path)
	}
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
	let read_error = |source| ModelError::Read {
		path: dir.to_path_buf(),
		source,
	};
	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(read_error)? {
		let path = entry.map_err(read_error)?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}

fn load_file(path: &Path) -> Result<Vec<ModuleDocumentation>> {
	let json = fs::read_to_string(path).map_err(|source| ModelError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let units: Units = serde_json::from_str(&json).map_err(|source| ModelError::Parse {
		path: path.to_path_buf(),
		source,
	})?;
	let units = match units {
		Units::Many(units) => units,
		Units::One(unit) => vec![*unit],
	};
	debug!(path = %path.display(), count = units.len(), "loaded documentation units");
	Ok(units)
}

/// Key units by module name. A later unit with an already seen name replaces the earlier one.
pub fn collect_modules<I>(units: I) -> ModuleMap
where
	I: IntoIterator<Item = ModuleDocumentation>,
{
	let mut modules = ModuleMap::new();
	for unit in units {
		if let Some(previous) = modules.insert(unit.name.clone(), unit) {
			warn!(module = %previous.name, "duplicate module name, keeping the last definition");
		}
	}
	modules
}
