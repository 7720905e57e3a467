//! Core transformation logic for document tagging.
//!
//! This module contains the pure stages of the pipeline: range expansion,
//! the label → document-ID mapping, heading-line handling, and the document
//! parser.

/// Document records, the collection parser, and tag application.
pub mod document;
pub use document::{ApplyError, DocumentCollection, DocumentRecord, ParseError};

/// Heading-line ID extraction and tag insertion.
pub mod heading;
pub use heading::HeadingError;

/// The label → document-ID mapping and its line format.
pub mod mapping;
pub use mapping::{Mapping, MappingError};

/// Compact range-spec expansion.
pub mod range;
pub use range::ExpandError;
