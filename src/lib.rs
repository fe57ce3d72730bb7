//! `quoteform` - turn a plain-text quote list into a notes learner topic file.
//!
//! The library exposes the conversion pipeline and a reader for the produced
//! documents so both can be used outside the command-line tool.

pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod topic;
pub mod types;

pub use converter::{convert, convert_with, ConversionReport};
pub use error::{Error, Result};
pub use types::AccumulationMode;
