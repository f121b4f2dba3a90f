//! Plain-text dump of an analyzed tileset
//!
//! The format is line oriented: a short header, one `material` line per
//! palette entry with its representative color, then one line per selector
//! code listing every tile that realizes it.
//!
//! ```text
//! # autowang mapping 5x4 tiles
//! material 0 00000000
//! material 1 3c8c28ff
//! 00000001 1,0
//! 01010101 0,1 3,2
//! ```

use crate::analysis::template::TemplateAnalysis;
use crate::io::error::{AutotileError, Result};
use std::path::Path;

/// Render the mapping and palette of `analysis` as text
pub fn format_mapping(analysis: &TemplateAnalysis) -> String {
    let [columns, rows] = analysis.grid_size;
    let mut lines = vec![format!("# autowang mapping {columns}x{rows} tiles")];

    for (id, character) in analysis.palette.entries().iter().enumerate() {
        let [r, g, b, a] = character.representative;
        lines.push(format!("material {id} {r:02x}{g:02x}{b:02x}{a:02x}"));
    }

    for (code, tiles) in analysis.mapping.entries() {
        let positions: Vec<String> = tiles.iter().map(|[x, y]| format!("{x},{y}")).collect();
        lines.push(format!("{code} {}", positions.join(" ")));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Write [`format_mapping`] output to `path`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_mapping(analysis: &TemplateAnalysis, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, format_mapping(analysis)).map_err(|e| AutotileError::FileSystem {
        path: path.to_path_buf(),
        operation: "write mapping",
        source: e,
    })
}
