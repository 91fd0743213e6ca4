//! Validate command implementation.
//!
//! Parses palette files and plans their layouts without rendering.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::atlas::AtlasOptions;
use crate::discovery::find_palettes;
use crate::error::{AtlasError, Result};
use crate::layout::{plan, GridPlan};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_hex_palette;

use super::AtlasArgs;

/// Check palette files without writing images
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Palette files or directories (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Scan directories recursively
    #[arg(long, short)]
    pub recursive: bool,

    #[command(flatten)]
    pub atlas: AtlasArgs,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
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

    let mut failed = 0;
    for file in &files {
        match check(file, &options) {
            Ok((colours, plan)) => printer.status(
                "Checked",
                &format!(
                    "{} ({}, {}x{} grid)",
                    display_path(file),
                    plural(colours, "colour", "colours"),
                    plan.cols,
                    plan.rows
                ),
            ),
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(file), e));
            }
        }
    }

    if failed > 0 {
        return Err(AtlasError::BatchFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn check(path: &Path, options: &AtlasOptions) -> Result<(usize, GridPlan)> {
    let source = fs::read_to_string(path).map_err(|e| AtlasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    let palette = parse_hex_palette(&source)?;
    let plan = plan(options.layout, palette.len(), options.size)?;
    Ok((palette.len(), plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn args(paths: Vec<PathBuf>, extra: &[&str]) -> ValidateArgs {
        let mut argv = vec!["hexatlas", "validate"];
        argv.extend_from_slice(extra);
        let cli = super::super::Cli::try_parse_from(argv).unwrap();
        let super::super::Commands::Validate(mut args) = cli.command else {
            panic!("expected validate");
        };
        args.paths = paths;
        args
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.hex"), "ff0000\n00ff00\n").unwrap();
        run(args(vec![dir.path().to_path_buf()], &[]), &Printer::new(true)).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_validate_reports_failures() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.hex"), "oops\n").unwrap();
        fs::write(dir.path().join("big.hex"), "000000\n".repeat(10)).unwrap();
        fs::write(dir.path().join("ok.hex"), "000000\n").unwrap();

        let err = run(
            args(vec![dir.path().to_path_buf()], &["--size", "2"]),
            &Printer::new(true),
        )
        .unwrap_err();
        assert!(matches!(err, AtlasError::BatchFailed { failed: 2, total: 3 }));
    }

    #[test]
    fn test_check_returns_plan() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("five.hex");
        fs::write(&file, "000000\n111111\n222222\n333333\n444444\n").unwrap();
        let (colours, plan) = check(&file, &AtlasOptions::default()).unwrap();
        assert_eq!(colours, 5);
        assert_eq!((plan.cols, plan.rows), (3, 2));
    }

    #[test]
    fn test_validate_checks_atlas_options() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.hex"), "ff0000\n").unwrap();

        for extra in [["--shade", "0"], ["--background", "nope"]] {
            let err = run(
                args(vec![dir.path().to_path_buf()], &extra),
                &Printer::new(true),
            )
            .unwrap_err();
            assert!(matches!(err, AtlasError::Config { .. }));
        }
    }
}
