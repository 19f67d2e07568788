//! Input file discovery.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{MergeError, Result};

/// List the files directly inside `folder` whose name matches `pattern`.
///
/// The scan is not recursive. Results are sorted by file name so that the
/// merge order does not depend on the order the filesystem returns entries
/// in. Matching ignores case. Names starting with `~$` (Office lock files)
/// are skipped. A folder that does not exist has no matching files.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid glob or the folder cannot
/// be read.
pub fn collect_input_files(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|source| MergeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    if !folder.is_dir() {
        tracing::debug!(folder = %folder.display(), "input folder does not exist");
        return Ok(Vec::new());
    }

    let listing_err = |source| MergeError::Listing {
        path: folder.to_path_buf(),
        source,
    };

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(listing_err)? {
        let entry = entry.map_err(listing_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("~$") {
            tracing::debug!(file = %name, "skipping office lock file");
            continue;
        }
        if matcher.matches_with(&name, options) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
