//! File system scanner for `.hex` palette files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AtlasError, Result};

use super::PALETTE_EXTENSION;

/// Check whether a path names a palette file.
pub fn is_palette_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PALETTE_EXTENSION))
}

/// Scan a directory for palette files.
///
/// Only the directory itself is searched unless `recursive` is set. Results
/// are sorted so batches run in a stable order.
pub fn scan_directory(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(true).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_palette_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}

/// Resolve command-line inputs to palette files.
///
/// Files are taken as given, whatever their extension. Directories are
/// scanned. A path that does not exist is an error. A file reached more
/// than once is kept at its first position only.
pub fn find_palettes(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(scan_directory(input, recursive));
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(AtlasError::Io {
                path: input.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(fs::canonicalize(file).unwrap_or_else(|_| file.clone())));
    Ok(files)
}
