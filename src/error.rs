use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hexatlas operations
#[derive(Error, Diagnostic, Debug)]
pub enum AtlasError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hexatlas::io))]
    Io { path: PathBuf, message: String },

    #[error("Malformed palette entry on line {line}: {content:?}")]
    #[diagnostic(
        code(hexatlas::parse),
        help("Each line must be RRGGBB or RRGGBBAA, optionally prefixed with #")
    )]
    MalformedPaletteEntry { line: usize, content: String },

    #[error("Palette contains no colours")]
    #[diagnostic(
        code(hexatlas::parse),
        help("Add at least one hex colour line to the palette file")
    )]
    EmptyPalette,

    #[error("Palette of {colours} colours does not fit a {canvas}x{canvas} canvas: {detail}")]
    #[diagnostic(code(hexatlas::layout))]
    PaletteTooLarge {
        colours: usize,
        canvas: u32,
        detail: String,
    },

    #[error("Canvas coverage incomplete: {unwritten} pixel(s) unwritten, {overwritten} written more than once")]
    #[diagnostic(
        code(hexatlas::raster),
        help("This is a layout bug; please report it with the palette that triggered it")
    )]
    IncompleteCoverage { unwritten: usize, overwritten: usize },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(hexatlas::encode))]
    EncodingFailure { path: PathBuf, message: String },

    #[error("Output {path} is already produced by {first}")]
    #[diagnostic(
        code(hexatlas::build),
        help("Rename one of the palettes or build them into separate output directories")
    )]
    OutputCollision { path: PathBuf, first: PathBuf },

    #[error("{failed} of {total} palette file(s) failed")]
    #[diagnostic(code(hexatlas::build))]
    BatchFailed { failed: usize, total: usize },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(hexatlas::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
