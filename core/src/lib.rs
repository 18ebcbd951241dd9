#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of `arrio`, containing the data model
//! shared by all other crates in the project.
//!
//! The current structure of this crate is as follows:
//!
//! - [`container`] declares the [array container](ArrayContainer),
//!   the multi-dimensional array of typed elements which format adapters
//!   read and write.
//! - [`element`] holds the [element kinds](ElementKind) an array can be
//!   made of and the corresponding typed [sample storage](Samples).
//! - [`tags`] declares the free-form [string tags](TagList) which can be
//!   attached to a container and to each of its components,
//!   as well as the well-known tag keys and values.
//!
//! With the `ndarray` Cargo feature enabled, sample data can also be
//! [converted](ArrayContainer::to_ndarray) into an `ndarray` array
//! for numeric inspection.

pub mod container;
pub mod element;
pub mod tags;

pub use container::{ArrayContainer, ContainerError, C};
pub use element::{ElementKind, Samples};
pub use tags::TagList;

// re-export crates that are part of the public API
pub use smallvec;
