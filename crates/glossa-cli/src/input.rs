//! Reading documents and dictionaries from disk.

use std::fs;
use std::path::Path;

use glossa_types::{Dictionary, Tree};
use tracing::debug;

use crate::error::LoadError;

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Parse a JSON document into a tree, keeping key order. A leading byte
/// order mark is ignored.
pub fn load_tree(path: &Path) -> Result<Tree, LoadError> {
    let text = read_text(path)?;
    let body = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let tree: Tree = serde_json::from_str(body).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), leaves = tree.leaf_count(), "loaded document");
    Ok(tree)
}

pub fn load_dictionary(path: &Path) -> Result<Dictionary, LoadError> {
    let dictionary = Dictionary::parse(&read_text(path)?);
    debug!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}
