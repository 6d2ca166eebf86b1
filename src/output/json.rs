//! JSON export

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::scan::ResultNode;

/// Serialize the result tree as pretty-printed JSON.
pub fn to_json(node: &ResultNode) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Write the result tree as JSON to `path`.
pub fn write_json(node: &ResultNode, path: &Path) -> Result<(), ExportError> {
    let json = to_json(node)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
