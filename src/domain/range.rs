//! Expansion of compact range specs into explicit ID lists.

/// Error returned when a range-spec token cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid range spec token '{0}': expected an integer or a start-end pair")]
pub struct ExpandError(String);

/// Expands a compact range spec into an explicit list of document IDs.
///
/// The spec is a comma-separated list of tokens; whitespace anywhere in the
/// string is ignored. A plain integer token contributes its value. A
/// `start-end` token contributes every integer in `[start, end)` — the end
/// value is excluded, so `"5-7"` expands to `[5, 6]`. Existing mapping files
/// rely on this half-open behavior, so it must not change.
///
/// Duplicates from overlapping ranges are preserved.
///
/// # Errors
///
/// Returns [`ExpandError`] if any token is neither a valid integer nor a
/// valid `start-end` pair.
pub fn expand(spec: &str) -> Result<Vec<u64>, ExpandError> {
    let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();

    let mut numbers = Vec::new();
    for token in compact.split(',') {
        if let Some((start, end)) = token.split_once('-') {
            let start: u64 = start.parse().map_err(|_| ExpandError(token.to_string()))?;
            let end: u64 = end.parse().map_err(|_| ExpandError(token.to_string()))?;
            numbers.extend(start..end);
        } else {
            let value = token.parse().map_err(|_| ExpandError(token.to_string()))?;
            numbers.push(value);
        }
    }
    Ok(numbers)
}
