//! `.hex` palette file parser.
//!
//! One colour per line, `RRGGBB` or `RRGGBBAA`, optionally prefixed with `#`.
//! Blank lines and comment lines are skipped. Comments start with `;`, `//`,
//! or a `#` followed by whitespace (or nothing), so `#zzzzzz` is still an
//! error rather than a comment.

use crate::error::{AtlasError, Result};
use crate::types::{Colour, Palette};

/// Parse the text of a hex palette file.
///
/// Fails on the first line that is neither blank, a comment, nor a valid
/// colour; no partial palette is returned.
pub fn parse_hex_palette(source: &str) -> Result<Palette> {
    let mut colours = Vec::new();
    let mut has_alpha = false;

    for (i, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let colour = Colour::from_hex(digits).map_err(|_| AtlasError::MalformedPaletteEntry {
            line: i + 1,
            content: trimmed.to_string(),
        })?;

        if digits.len() == 8 {
            has_alpha = true;
        }
        colours.push(colour);
    }

    Palette::new(colours, has_alpha)
}

fn is_comment(line: &str) -> bool {
    if line.starts_with(';') || line.starts_with("//") {
        return true;
    }
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('#'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple() {
        let palette = parse_hex_palette("FF0000\n#00ff00\n0000FF\n").unwrap();
        assert_eq!(
            palette.colours(),
            &[
                Colour::rgb(255, 0, 0),
                Colour::rgb(0, 255, 0),
                Colour::rgb(0, 0, 255)
            ]
        );
        assert!(!palette.has_alpha());
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let source = "; lospec export\n\n# warm tones\n//\n#\n  a0522d  \n## section\nffd700\n";
        let palette = parse_hex_palette(source).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0), Some(Colour::rgb(0xa0, 0x52, 0x2d)));
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let palette = parse_hex_palette("ffffff\n000000\nffffff\n").unwrap();
        assert_eq!(
            palette.colours(),
            &[Colour::WHITE, Colour::BLACK, Colour::WHITE]
        );
    }

    #[test]
    fn test_alpha_entries() {
        let palette = parse_hex_palette("#ff000080\n00ff00\n").unwrap();
        assert!(palette.has_alpha());
        assert_eq!(palette.get(0), Some(Colour::new(255, 0, 0, 128)));
        assert_eq!(palette.get(1), Some(Colour::rgb(0, 255, 0)));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = parse_hex_palette("ff0000\n\nzzzzzz\n00ff00\n").unwrap_err();
        match err {
            AtlasError::MalformedPaletteEntry { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "zzzzzz");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_hash_prefixed_garbage_is_not_a_comment() {
        let err = parse_hex_palette("#zzzzzz\n").unwrap_err();
        assert!(matches!(
            err,
            AtlasError::MalformedPaletteEntry { line: 1, .. }
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(parse_hex_palette("fff\n").is_err());
        assert!(parse_hex_palette("ff00ff0\n").is_err());
    }

    #[test]
    fn test_double_hash_is_comment() {
        let palette = parse_hex_palette("##ff00ff\nffffff\n").unwrap();
        assert_eq!(palette.colours(), &[Colour::WHITE]);
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_hex_palette("\n; nothing here\n"),
            Err(AtlasError::EmptyPalette)
        ));
    }

    #[test]
    fn test_round_trip_case_insensitive() {
        let source = "#1a1c2c\n5D275D\n#b13e53\n";
        let palette = parse_hex_palette(source).unwrap();
        let original: Vec<String> = source
            .lines()
            .map(|l| format!("#{}", l.trim_start_matches('#').to_uppercase()))
            .collect();
        assert_eq!(palette.to_hex_lines(), original);
    }
}
