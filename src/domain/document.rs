//! Document records, the collection parser, and tag application.
//!
//! A collection is plain text: an optional header block, then repeated
//! documents each introduced by a `<headingline>ID...</headingline>` line and
//! followed by body lines, with blank lines as separators.

use std::collections::BTreeMap;

use super::{
    heading::{self, HeadingError},
    Mapping,
};

/// Lines that start with this prefix (after trimming) delimit documents.
const HEADING_PREFIX: &str = "<headingline>";

/// One logical document: its heading line and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// The stripped heading line, `<headingline>ID...</headingline>`.
    pub heading: String,
    /// The stripped non-blank body lines, joined by newlines.
    pub body: String,
}

/// Errors produced while parsing a document collection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// More than one header block appeared before the first heading line.
    #[error("document collection has more than one header block")]
    DuplicateHeader,

    /// A heading line lacked the `<headingline><digits>...</headingline>`
    /// shape.
    #[error(transparent)]
    Heading(#[from] HeadingError),
}

/// Errors produced while applying a mapping to a collection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApplyError {
    /// The mapping references a document ID absent from the collection.
    #[error("mapping references unknown document ID {0}")]
    UnknownDocumentId(u64),

    /// A stored heading line was malformed.
    #[error(transparent)]
    Heading(#[from] HeadingError),
}

/// Parser state: before the first heading line a flushed buffer becomes the
/// header block; afterwards it becomes a document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeFirstHeading,
    InDocument,
}

/// Incremental line parser for a document collection.
#[derive(Debug)]
struct Parser {
    state: State,
    heading: String,
    buffer: Vec<String>,
    header: Option<Vec<String>>,
    documents: BTreeMap<u64, DocumentRecord>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::BeforeFirstHeading,
            heading: String::new(),
            buffer: Vec::new(),
            header: None,
            documents: BTreeMap::new(),
        }
    }

    /// Feeds one raw line. Blank lines are dropped entirely; they neither
    /// contribute content nor terminate buffering.
    fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        let line = line.trim();
        if line.starts_with(HEADING_PREFIX) {
            self.start_heading(line)?;
        } else if !line.is_empty() {
            self.buffer.push(line.to_string());
        }
        Ok(())
    }

    fn start_heading(&mut self, line: &str) -> Result<(), ParseError> {
        match self.state {
            State::BeforeFirstHeading => {
                if !self.buffer.is_empty() {
                    if self.header.is_some() {
                        return Err(ParseError::DuplicateHeader);
                    }
                    self.header = Some(std::mem::take(&mut self.buffer));
                }
                self.state = State::InDocument;
            }
            State::InDocument => {
                if !self.buffer.is_empty() {
                    self.flush_document()?;
                }
            }
        }
        self.heading = line.to_string();
        Ok(())
    }

    /// Stores the pending document under the ID extracted from the current
    /// heading. A later document with the same ID replaces the earlier one.
    fn flush_document(&mut self) -> Result<(), ParseError> {
        let id = heading::document_id(&self.heading)?;
        let body = std::mem::take(&mut self.buffer).join("\n");
        self.documents.insert(
            id,
            DocumentRecord {
                heading: self.heading.clone(),
                body,
            },
        );
        Ok(())
    }

    fn finish(mut self) -> Result<DocumentCollection, ParseError> {
        if !self.buffer.is_empty() {
            self.flush_document()?;
        }
        Ok(DocumentCollection {
            documents: self.documents,
            header: self.header,
        })
    }
}

/// A parsed document collection: records keyed by document ID plus an
/// optional leading header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    documents: BTreeMap<u64, DocumentRecord>,
    header: Option<Vec<String>>,
}

impl DocumentCollection {
    /// Parses a collection from its lines.
    ///
    /// A line whose stripped form starts with `<headingline>` begins a new
    /// document; any non-blank lines before the first heading form the header
    /// block. A document with no body lines is not stored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Heading`] if a finalized document's heading does
    /// not carry an extractable ID, or [`ParseError::DuplicateHeader`] if a
    /// second header block is captured.
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Parser::new();
        for line in lines {
            parser.push_line(line.as_ref())?;
        }
        parser.finish()
    }

    /// The optional header block, one entry per stripped line.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Looks up a document by ID.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&DocumentRecord> {
        self.documents.get(&id)
    }

    /// The number of documents in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates over documents in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &DocumentRecord)> {
        self.documents.iter().map(|(&id, record)| (id, record))
    }

    /// Applies every `(label, IDs)` pair of the mapping to the collection.
    ///
    /// Labels are applied in mapping insertion order and IDs in list order;
    /// each application splices the label in directly after the heading's
    /// digit run, so the label applied last sits closest to the digits.
    /// Bodies are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::UnknownDocumentId`] if the mapping references an
    /// ID with no document. The collection may already be partially tagged at
    /// that point; callers must not serialize it after a failure.
    pub fn apply(&mut self, mapping: &Mapping) -> Result<(), ApplyError> {
        for (label, ids) in mapping.iter() {
            for &id in ids {
                let record = self
                    .documents
                    .get_mut(&id)
                    .ok_or(ApplyError::UnknownDocumentId(id))?;
                record.heading = heading::insert_tag(&record.heading, label)?;
            }
            tracing::debug!(label, documents = ids.len(), "applied label");
        }
        Ok(())
    }
}
