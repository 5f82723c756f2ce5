use std::path::Path;

use crate::compdb::types::Style;

/// Pick the style of a source file from the directory it lives in.
///
/// The marker is matched as a plain, case-sensitive substring of the whole
/// directory path, so `my_c_style_experiments/` selects C as well as `c_style/`.
/// The file name itself is not inspected. An empty marker matches every path.
pub fn classify(path: &Path, marker: &str) -> Style {
    let dir = path.parent().unwrap_or(path);
    if dir.to_string_lossy().contains(marker) {
        Style::C
    } else {
        Style::Cxx
    }
}
