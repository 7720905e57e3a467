//! Reading and writing document collections.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::domain::{document::ParseError, DocumentCollection};

/// Errors that can occur when loading a document collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The content could not be parsed as a document collection.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reads a document collection from a buffered reader.
///
/// All lines are read to completion before any parsing happens.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not a valid
/// collection.
pub fn read<R: BufRead>(reader: R) -> Result<DocumentCollection, LoadError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(DocumentCollection::parse(lines)?)
}

/// Writes the collection: header block first (if one was captured), then each
/// document in ascending ID order as heading line, body text, and a blank
/// separator line.
///
/// # Errors
///
/// Returns an error if writing fails; the output may be truncated in that
/// case.
pub fn write<W: Write>(collection: &DocumentCollection, writer: &mut W) -> io::Result<()> {
    if let Some(header) = collection.header() {
        writeln!(writer, "{}", header.join("\n"))?;
    }
    for (_, record) in collection.iter() {
        writeln!(writer, "{}", record.heading)?;
        writeln!(writer, "{}", record.body)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Loads the document collection at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_collection(path: &Path) -> Result<DocumentCollection, LoadError> {
    let file = File::open(path)?;
    let collection = read(BufReader::new(file))?;
    tracing::debug!(documents = collection.len(), "loaded document collection");
    Ok(collection)
}

/// Writes the collection to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn save_collection(collection: &DocumentCollection, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(collection, &mut writer)?;
    writer.flush()
}
