//! Heading-line parsing and tag insertion.
//!
//! A heading line has the shape `<headingline><digits>...</headingline>`:
//! the digit run is the document ID, and any previously inserted tag markers
//! sit between the digits and the closing marker.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<headingline>(?<digits>\d+)(?<rest>.*</headingline>)$")
        .expect("heading pattern is valid")
});

/// Error returned when a heading line does not match
/// `<headingline><digits>...</headingline>`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("malformed heading line: '{0}'")]
pub struct HeadingError(String);

/// Splits a heading into its digit run and the remainder up to and including
/// the closing marker.
fn split(heading: &str) -> Result<(&str, &str), HeadingError> {
    let captures = HEADING_RE
        .captures(heading)
        .ok_or_else(|| HeadingError(heading.to_string()))?;
    let digits = captures
        .name("digits")
        .expect("digits group always captures")
        .as_str();
    let rest = captures
        .name("rest")
        .expect("rest group always captures")
        .as_str();
    Ok((digits, rest))
}

/// Extracts the numeric document ID from a heading line.
///
/// # Errors
///
/// Returns [`HeadingError`] if the line does not match the required shape or
/// the digit run does not fit in a `u64`.
pub fn document_id(heading: &str) -> Result<u64, HeadingError> {
    let (digits, _) = split(heading)?;
    digits
        .parse()
        .map_err(|_| HeadingError(heading.to_string()))
}

/// Returns a new heading with `label` inserted as a tag.
///
/// The label is wrapped in angle brackets verbatim (no escaping) and spliced
/// in directly after the digit run, ahead of any tags already present:
/// `insert_tag("<headingline>100<old></headingline>", "new")` yields
/// `"<headingline>100<new><old></headingline>"`.
///
/// # Errors
///
/// Returns [`HeadingError`] if the heading does not match the required shape.
pub fn insert_tag(heading: &str, label: &str) -> Result<String, HeadingError> {
    let (digits, rest) = split(heading)?;
    Ok(format!("<headingline>{digits}<{label}>{rest}"))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{document_id, insert_tag};

    #[test_case("<headingline>8</headingline>", 8; "bare id")]
    #[test_case("<headingline>42<a></headingline>", 42; "id with existing tag")]
    #[test_case("<headingline>007</headingline>", 7; "leading zeros")]
    fn extracts_id(heading: &str, expected: u64) {
        assert_eq!(document_id(heading).unwrap(), expected);
    }

    #[test_case("<headingline></headingline>"; "no digits")]
    #[test_case("<headingline>x1</headingline>"; "digits not first")]
    #[test_case("<headingline>1"; "missing close marker")]
    #[test_case("<headingline>1</headingline> trailing"; "content after close marker")]
    #[test_case("heading 1"; "not a heading at all")]
    fn rejects_malformed(heading: &str) {
        assert!(document_id(heading).is_err());
        assert!(insert_tag(heading, "label").is_err());
    }

    #[test]
    fn inserts_tag_after_digits() {
        let tagged = insert_tag("<headingline>42<a></headingline>", "b").unwrap();
        assert_eq!(tagged, "<headingline>42<b><a></headingline>");
    }

    #[test]
    fn inserts_tag_into_bare_heading() {
        let tagged = insert_tag("<headingline>8</headingline>", "exempli gratia").unwrap();
        assert_eq!(tagged, "<headingline>8<exempli gratia></headingline>");
    }

    #[test]
    fn label_is_not_escaped() {
        let tagged = insert_tag("<headingline>1</headingline>", "a<b>c").unwrap();
        assert_eq!(tagged, "<headingline>1<a<b>c></headingline>");
    }

    #[test]
    fn insertion_preserves_leading_zeros() {
        let tagged = insert_tag("<headingline>007</headingline>", "x").unwrap();
        assert_eq!(tagged, "<headingline>007<x></headingline>");
    }
}
