//! This crate declares the contract between the `arrio` library
//! and its format adapters.
//!
//! A format adapter translates between files in one particular format
//! and in-memory [array containers](arrio_core::ArrayContainer).
//! The [`FormatAdapter`] trait defines the operations every adapter
//! provides, and a [`FormatEntry`] describes one format statically
//! so that consumers can discover it and create adapter instances.
//!
//! Errors follow a single taxonomy for all formats,
//! declared in the [`error`] module.
//!
//! Codec crates such as `arrio-codec-jpeg` implement this contract;
//! they are the intended audience of most of this API.

pub mod adapter;
pub mod error;

pub use crate::adapter::{DynFormatAdapter, FormatAdapter, FormatEntry, WriteMode};
pub use crate::error::{Error, ErrorKind, Result};

// re-export snafu so that codec crates can build
// compatible errors without depending on it directly
pub use snafu;
