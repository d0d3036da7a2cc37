//! Text normalisation for multi-line metadata fields

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_RUN_RE: Regex = Regex::new(r" {2,}").unwrap();
}

/// Normalise hand-wrapped text for use in a metadata field
///
/// A newline with no newline on either side is a line wrap inside a paragraph
/// and becomes a space. Blank-line paragraph breaks are kept. Runs of spaces
/// are then collapsed to one. Applying the function twice changes nothing.
///
/// ```rust
/// use gmw_stac::app::format_multiline;
///
/// let text = "first line\nsecond  line\n\nnext paragraph";
/// assert_eq!(format_multiline(text), "first line second line\n\nnext paragraph");
/// ```
pub fn format_multiline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut unwrapped = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let after_newline = i > 0 && chars[i - 1] == '\n';
            let before_newline = chars.get(i + 1) == Some(&'\n');
            if !after_newline && !before_newline {
                unwrapped.push(' ');
                continue;
            }
        }
        unwrapped.push(c);
    }

    SPACE_RUN_RE.replace_all(&unwrapped, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{citation, dataset};

    #[test]
    fn test_wrapped_paragraph_collapses_to_one_line() {
        assert_eq!(
            format_multiline("Bunting, P.; Rosenqvist, A.; \nThomas, T."),
            "Bunting, P.; Rosenqvist, A.; Thomas, T."
        );
    }

    #[test]
    fn test_paragraph_breaks_preserved() {
        let text = "one\ntwo\n\nthree\nfour";
        assert_eq!(format_multiline(text), "one two\n\nthree four");
    }

    #[test]
    fn test_longer_newline_runs_preserved() {
        assert_eq!(format_multiline("a\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_space_runs_collapsed() {
        assert_eq!(format_multiline("a    b  c"), "a b c");
    }

    #[test]
    fn test_idempotent() {
        for text in [
            dataset::DESCRIPTION,
            citation::DATASET_CITATION,
            citation::PUBLICATION_CITATION,
            "x \n y\n\n z",
            "",
        ] {
            let once = format_multiline(text);
            assert_eq!(format_multiline(&once), once);
        }
    }

    #[test]
    fn test_citation_has_no_line_wraps() {
        let citation = format_multiline(citation::DATASET_CITATION);
        assert!(!citation.contains('\n'));
        assert!(citation.ends_with("Zenodo. 10.5281/zenodo.6894273"));
    }

    #[test]
    fn test_edge_newlines() {
        assert_eq!(format_multiline("\nabc\n"), " abc ");
    }
}
