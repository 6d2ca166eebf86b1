//! HTML export with an interactive drill-down pie chart

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::scan::ResultNode;

const TEMPLATE: &str = include_str!("template.html");
const DATA_PLACEHOLDER: &str = "/*@RESULT_TREE@*/null";

/// Render a standalone page with the result tree embedded as JSON.
pub fn render_html(node: &ResultNode) -> Result<String, ExportError> {
    let json = serde_json::to_string(node)?;
    // keep "</script>" inside a path from closing the script element
    let json = json.replace("</", "<\\/");
    Ok(TEMPLATE.replace(DATA_PLACEHOLDER, &json))
}

/// Write the HTML page for the result tree to `path`.
pub fn write_html(node: &ResultNode, path: &Path) -> Result<(), ExportError> {
    let html = render_html(node)?;
    fs::write(path, html).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
