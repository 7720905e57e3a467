//! File reading and writing for mappings and document collections.

mod collection;
mod mapping;

pub use collection::{load_collection, read, save_collection, write, LoadError};
pub use mapping::{read_mapping, ReadError};
