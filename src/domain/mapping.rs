//! The label → document-ID mapping and its line format.
//!
//! A mapping file contains one category per line in the form
//! `<label>: n. <rangespec>`, for example `exempli gratia: n. 5-7, 10, 25`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::range::{self, ExpandError};

// Greedy label capture: the label runs up to the *last* ': n. ' separator on
// the line, and the range spec must start with a digit.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<label>.*):\s+n\.\s+(?<spec>\d.*)$").expect("mapping pattern is valid")
});

/// Errors produced while parsing mapping content.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MappingError {
    /// A non-blank line does not match `<label>: n. <rangespec>`.
    #[error("mapping line does not match '<label>: n. <rangespec>': '{0}'")]
    Format(String),

    /// A range spec could not be expanded.
    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// An ordered association from category label to document IDs.
///
/// Iteration order is the order in which labels first appeared in the source;
/// re-defining a label replaces its ID list without moving it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mapping {
    labels: IndexMap<String, Vec<u64>>,
}

impl Mapping {
    /// Parses mapping-file content.
    ///
    /// Blank lines (after trimming) are skipped. Every other line must have
    /// the shape `<label>: n. <rangespec>`; its range spec is expanded via
    /// [`range::expand`]. A duplicate label overwrites the earlier ID list.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Format`] for a line that does not match the
    /// required shape, or [`MappingError::Expand`] if a range spec is
    /// malformed.
    pub fn parse(content: &str) -> Result<Self, MappingError> {
        let mut labels = IndexMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let captures = LINE_RE
                .captures(line)
                .ok_or_else(|| MappingError::Format(line.to_string()))?;
            let numbers = range::expand(&captures["spec"])?;
            labels.insert(captures["label"].to_string(), numbers);
        }
        Ok(Self { labels })
    }

    /// Iterates over `(label, ids)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.labels
            .iter()
            .map(|(label, ids)| (label.as_str(), ids.as_slice()))
    }

    /// Returns the ID list for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[u64]> {
        self.labels.get(label).map(Vec::as_slice)
    }

    /// The number of labels in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the mapping contains no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Mapping, MappingError};

    #[test]
    fn parses_example_lines() {
        let mapping = Mapping::parse(
            "exempli gratia: n. 5-7, 10, 25\n\
             carpe diem: n. 8, 18, 28\n",
        )
        .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("exempli gratia").unwrap(), &[5, 6, 10, 25]);
        assert_eq!(mapping.get("carpe diem").unwrap(), &[8, 18, 28]);
    }

    #[test]
    fn iteration_follows_source_order() {
        let mapping = Mapping::parse("b: n. 1\na: n. 2\nc: n. 3\n").unwrap();
        let labels: Vec<_> = mapping.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["b", "a", "c"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mapping = Mapping::parse("\na: n. 1\n\n   \nb: n. 2\n\n").unwrap();
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn duplicate_label_keeps_position_and_replaces_ids() {
        let mapping = Mapping::parse("a: n. 1\nb: n. 2\na: n. 9\n").unwrap();

        let labels: Vec<_> = mapping.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["a", "b"]);
        assert_eq!(mapping.get("a").unwrap(), &[9]);
    }

    #[test]
    fn label_runs_to_last_separator() {
        // The label itself may contain a ': n. ' sequence; only the last one
        // on the line splits label from range spec.
        let mapping = Mapping::parse("odd: n. label: n. 4\n").unwrap();
        assert_eq!(mapping.get("odd: n. label").unwrap(), &[4]);
    }

    #[test]
    fn rejects_line_without_separator() {
        let err = Mapping::parse("no separator here\n").unwrap_err();
        assert_eq!(err, MappingError::Format("no separator here".to_string()));
    }

    #[test]
    fn rejects_spec_not_starting_with_digit() {
        assert!(matches!(
            Mapping::parse("a: n. x-3\n"),
            Err(MappingError::Format(_))
        ));
    }

    #[test]
    fn propagates_expansion_failure() {
        assert!(matches!(
            Mapping::parse("a: n. 1,2-\n"),
            Err(MappingError::Expand(_))
        ));
    }
}
