//! Reading code to review and writing improved code back

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use revisor_core::{AnalysisResult, Result};

/// Read the code to review from `path`, or from stdin when no path is given
pub fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

/// Write the improved code of `analysis` to `path`.
///
/// Returns `false` without touching the file when there is no improved code.
pub fn save_improved_code(path: &Path, analysis: &AnalysisResult) -> Result<bool> {
    if !analysis.has_improved_code() {
        return Ok(false);
    }

    let mut contents = analysis.improved_code.clone();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(true)
}
