//! Batch tagging of plain-text document collections.
//!
//! A mapping file assigns numeric document IDs to category labels; each label
//! is injected as a tag into the heading line of every document it maps to,
//! and the annotated collection is written back out in ascending ID order.

pub mod domain;
pub use domain::{DocumentCollection, DocumentRecord, Mapping};

/// File reading and writing for mappings and document collections.
pub mod storage;
