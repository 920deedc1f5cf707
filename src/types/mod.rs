//! Core type definitions for dotsnap

mod context;
mod error;
mod outcome;

pub use context::{HomeContext, ARCHIVE_FILE_NAME, CONFIG_FILE_NAME};
pub use error::DotsnapError;
pub use outcome::{CopyOutcome, EntryReport, RunReport};
