//! Palette discovery and output naming.
//!
//! # Example
//!
//! ```ignore
//! use hexatlas::discovery::{find_palettes, output_path};
//!
//! for file in find_palettes(&["palettes".into()], false)? {
//!     println!("{}", output_path(&file, "dist".as_ref(), "-cta", "png").display());
//! }
//! ```

mod scanner;

use std::path::{Path, PathBuf};

pub use scanner::{find_palettes, is_palette_file, scan_directory};

/// Extension of palette input files.
pub const PALETTE_EXTENSION: &str = "hex";

/// Default suffix appended to the palette's file stem.
pub const DEFAULT_SUFFIX: &str = "-cta";

/// Build `<output_dir>/<stem><suffix>.<extension>` for an input palette.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "palette".to_string());
    output_dir.join(format!("{}{}.{}", stem, suffix, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let out = output_path(Path::new("palettes/endesga-32.hex"), Path::new("dist"), "-cta", "png");
        assert_eq!(out, Path::new("dist").join("endesga-32-cta.png"));
    }

    #[test]
    fn test_output_path_custom_suffix() {
        let out = output_path(Path::new("pico8.hex"), Path::new("."), "_atlas", "json");
        assert_eq!(out, Path::new(".").join("pico8_atlas.json"));
    }
}
