//! JSON layout manifest.
//!
//! Describes where every cell of an atlas sits and which colours it was
//! painted from, so engines can look up swatch UVs without re-deriving the
//! layout.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::atlas::Atlas;
use crate::error::{AtlasError, Result};
use crate::gradient::Axis;
use crate::layout::{CellRole, LayoutStyle, Rect};

#[derive(Serialize)]
struct AtlasManifest<'a> {
    image: &'a str,
    size: u32,
    layout: LayoutStyle,
    grid: GridInfo,
    cells: Vec<ManifestCell>,
}

#[derive(Serialize)]
struct GridInfo {
    rows: u32,
    cols: u32,
    cell_width: u32,
    cell_height: u32,
}

#[derive(Serialize)]
struct ManifestCell {
    rect: Rect,
    role: CellRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    axis: Option<Axis>,
    stops: Vec<String>,
}

/// Render the manifest for an atlas as pretty-printed JSON.
pub fn manifest_json(atlas: &Atlas, image: &str) -> Result<String> {
    let plan = &atlas.plan;
    let manifest = AtlasManifest {
        image,
        size: plan.canvas,
        layout: plan.style,
        grid: GridInfo {
            rows: plan.rows,
            cols: plan.cols,
            cell_width: plan.cell_width,
            cell_height: plan.cell_height,
        },
        cells: atlas
            .jobs
            .iter()
            .map(|job| ManifestCell {
                rect: job.cell.rect,
                role: job.cell.role,
                axis: job.fill.axis(),
                stops: job
                    .fill
                    .stops()
                    .iter()
                    .map(|c| c.to_hex(atlas.has_alpha))
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&manifest).map_err(|e| AtlasError::EncodingFailure {
        path: image.into(),
        message: format!("Failed to serialize layout manifest: {}", e),
    })
}

/// Write the manifest next to its image.
pub fn write_manifest(atlas: &Atlas, image: &str, path: &Path) -> Result<()> {
    let json = manifest_json(atlas, image)?;
    fs::write(path, json).map_err(|e| AtlasError::EncodingFailure {
        path: path.to_path_buf(),
        message: format!("Failed to write layout manifest: {}", e),
    })
}
