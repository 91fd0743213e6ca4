//! Build command implementation.
//!
//! Turns each palette file into a PNG atlas. Files fail independently: a bad
//! palette is reported and skipped, and the rest of the batch still runs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::atlas::{compose, AtlasOptions};
use crate::discovery::{find_palettes, output_path, DEFAULT_SUFFIX};
use crate::error::{AtlasError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_hex_palette;
use crate::render::{write_atlas_png, write_manifest};

use super::AtlasArgs;

/// Compose atlases from palette files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Palette files or directories (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Suffix appended to each palette name
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Scan directories recursively
    #[arg(long, short)]
    pub recursive: bool,

    /// Keep existing atlases instead of overwriting them
    #[arg(long)]
    pub skip_existing: bool,

    /// Also write a JSON layout manifest next to each atlas
    #[arg(long)]
    pub manifest: bool,

    #[command(flatten)]
    pub atlas: AtlasArgs,
}

enum Outcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let options = args.atlas.to_options()?;

    let inputs = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let files = find_palettes(&inputs, args.recursive)?;

    if files.is_empty() {
        printer.warning("Warning", "No .hex palette files found");
        return Ok(());
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| AtlasError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut written = 0;
    let mut skipped = 0;
    let mut failed = 0;
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    for file in &files {
        let png_path = output_path(file, &args.output, &args.suffix, "png");
        let result = match claimed.get(&png_path) {
            Some(first) => Err(AtlasError::OutputCollision {
                path: png_path,
                first: first.to_path_buf(),
            }),
            None => {
                claimed.insert(png_path.clone(), file);
                build_one(file, png_path, &args, &options, printer)
            }
        };

        match result {
            Ok(Outcome::Written(path)) => {
                written += 1;
                printer.status("Wrote", &display_path(&path));
            }
            Ok(Outcome::Skipped(path)) => {
                skipped += 1;
                printer.info(
                    "Skipped",
                    &format!("{} {}", display_path(&path), printer.dim("(exists)")),
                );
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(file), e));
            }
        }
    }

    let mut summary = plural(written, "atlas", "atlases");
    if skipped > 0 {
        summary.push_str(&format!(", {} skipped", skipped));
    }
    if failed > 0 {
        summary.push_str(&format!(", {} failed", failed));
    }
    printer.status("Finished", &summary);

    if failed > 0 {
        return Err(AtlasError::BatchFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// Compose and write the atlas for one palette file.
fn build_one(
    path: &Path,
    png_path: PathBuf,
    args: &BuildArgs,
    options: &AtlasOptions,
    printer: &Printer,
) -> Result<Outcome> {
    if args.skip_existing && png_path.exists() {
        return Ok(Outcome::Skipped(png_path));
    }

    let source = fs::read_to_string(path).map_err(|e| AtlasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    let palette = parse_hex_palette(&source)?;

    printer.status(
        "Composing",
        &format!(
            "{} ({})",
            display_path(path),
            plural(palette.len(), "colour", "colours")
        ),
    );

    let atlas = compose(&palette, options)?;
    write_atlas_png(&atlas.canvas, &png_path, atlas.has_alpha)?;

    if args.manifest {
        let json_path = output_path(path, &args.output, &args.suffix, "json");
        let image = png_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_manifest(&atlas, &image, &json_path)?;
    }

    Ok(Outcome::Written(png_path))
}
