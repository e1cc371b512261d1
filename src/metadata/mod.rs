//! The metadata object model.
//!
//! This is the subset of ECMA-335 metadata that display-name reconstruction and attribute
//! editing work on. Entities are owned values with their relations already resolved, the
//! way a loader hands them out after processing the metadata tables.
//!
//! # Key Components
//!
//! - [`signatures`] - Type signatures with instantiated generic arguments
//! - [`typesystem`] - Type definitions and the [`typesystem::NameFormatter`]
//! - [`method`] - Method definitions and parameters
//! - [`members`] - Properties and events with their accessor slots
//! - [`customattributes`] - Custom attribute entries
//! - [`Assembly`] - The assembly and its custom-attribute collection

mod assembly;

pub mod customattributes;
pub mod members;
pub mod method;
pub mod signatures;
pub mod typesystem;

pub use assembly::Assembly;
