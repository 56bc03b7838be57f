//! Static report index.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::INDEX_FILE_NAME;

use super::html::escape_html;

/// Builds `index.html` over the HTML reports in a directory.
///
/// Lists every `.html` file except the index itself, sorted by filename, as
/// an unordered list of links. Rerunning regenerates the index without
/// listing the previous one.
///
/// Returns the path of the written index file.
pub fn build_index(dir: &Path) -> Result<PathBuf> {
    let mut names: Vec<String> = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == INDEX_FILE_NAME {
            continue;
        }
        if Path::new(&name).extension().and_then(|e| e.to_str()) == Some("html") {
            names.push(name);
        }
    }
    names.sort();

    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Reports</title>\n</head>\n<body>\n<h1>Reports</h1>\n<ul>\n",
    );
    for name in &names {
        let escaped = escape_html(name);
        out.push_str(&format!(
            "  <li><a href=\"{}\">{}</a></li>\n",
            escaped, escaped
        ));
    }
    out.push_str("</ul>\n</body>\n</html>\n");

    let index_path = dir.join(INDEX_FILE_NAME);
    fs::write(&index_path, out)
        .with_context(|| format!("Failed to write index file: {}", index_path.display()))?;

    Ok(index_path)
}
