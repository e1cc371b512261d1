//! Type signatures as they appear in metadata.
//!
//! Signatures reference types by name and carry instantiated generic arguments separately
//! from the generic type itself. A `List<int>` field is stored as a generic instantiation of
//! the type named ``List`1`` with the single argument `int32`:
//!
//! ```rust
//! use dotstamp::metadata::signatures::TypeSignature;
//!
//! let field_type = TypeSignature::generic_inst(
//!     TypeSignature::class("System.Collections.Generic", "List`1"),
//!     vec![TypeSignature::I4],
//! );
//!
//! assert_eq!(field_type.type_name(), "List`1");
//! assert_eq!(field_type.generic_args(), &[TypeSignature::I4]);
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.2 - Blobs and Signatures

mod types;

pub use types::*;
