//! Reading the mapping file.

use std::{fs, io, path::Path};

use crate::domain::{Mapping, MappingError};

/// Errors that can occur when reading a mapping file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file content was not a valid mapping.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Reads and parses the mapping file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not a valid
/// mapping.
pub fn read_mapping(path: &Path) -> Result<Mapping, ReadError> {
    let content = fs::read_to_string(path)?;
    let mapping = Mapping::parse(&content)?;
    tracing::debug!(labels = mapping.len(), "read mapping file");
    Ok(mapping)
}
