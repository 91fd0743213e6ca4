//! PNG output for finished atlases.
//!
//! Writes go to a sibling `.partial` file that is renamed into place only
//! after encoding succeeds, so a failed run never leaves a truncated PNG
//! behind. An existing file at the destination is replaced.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageFormat, Rgb, Rgba};

use crate::error::{AtlasError, Result};
use crate::raster::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The finished canvas
/// * `path` - Output file path
/// * `alpha` - Write RGBA when true, RGB otherwise
pub fn write_atlas_png(canvas: &Canvas, path: &Path, alpha: bool) -> Result<()> {
    let staging = staging_path(path);

    let result = encode(canvas, &staging, alpha).and_then(|()| {
        fs::rename(&staging, path).map_err(|e| AtlasError::EncodingFailure {
            path: path.to_path_buf(),
            message: format!("Failed to move PNG into place: {}", e),
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn encode(canvas: &Canvas, staging: &Path, alpha: bool) -> Result<()> {
    let size = canvas.size();
    let failure = |message: String| AtlasError::EncodingFailure {
        path: staging.to_path_buf(),
        message,
    };

    let saved = if alpha {
        ImageBuffer::<Rgba<u8>, _>::from_raw(size, size, canvas.to_rgba_bytes())
            .ok_or_else(|| failure("Canvas buffer does not match its size".to_string()))?
            .save_with_format(staging, ImageFormat::Png)
    } else {
        ImageBuffer::<Rgb<u8>, _>::from_raw(size, size, canvas.to_rgb_bytes())
            .ok_or_else(|| failure("Canvas buffer does not match its size".to_string()))?
            .save_with_format(staging, ImageFormat::Png)
    };

    saved.map_err(|e| failure(format!("Failed to write PNG: {}", e)))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{Fill, PaintJob};
    use crate::layout::{Cell, CellRole, Rect};
    use crate::raster::{ProcessingMode, Rasterizer};
    use crate::types::Colour;
    use tempfile::tempdir;

    fn canvas(colour: Colour) -> Canvas {
        let mut raster = Rasterizer::new(2, ProcessingMode::Sequential);
        raster.paint(&[PaintJob {
            cell: Cell::new(Rect::new(0, 0, 2, 2), CellRole::Padding),
            fill: Fill::Solid(colour),
        }]);
        raster.finish().unwrap()
    }

    #[test]
    fn test_write_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.png");

        write_atlas_png(&canvas(Colour::rgb(255, 0, 0)), &path, false).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        let img = img.to_rgba8();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert!(!dir.path().join("atlas.png.partial").exists());
    }

    #[test]
    fn test_write_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_atlas_png(&canvas(Colour::new(0, 0, 255, 128)), &path, true).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgba8);
        assert_eq!(img.to_rgba8().get_pixel(0, 0).0, [0, 0, 255, 128]);
    }

    #[test]
    fn test_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.png");
        fs::write(&path, b"stale").unwrap();

        write_atlas_png(&canvas(Colour::BLACK), &path, false).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("atlas.png");

        let err = write_atlas_png(&canvas(Colour::BLACK), &path, false).unwrap_err();
        assert!(matches!(err, AtlasError::EncodingFailure { .. }));
        assert!(!path.exists());
    }
}
