//! Custom attribute entries for .NET metadata.
//!
//! Custom attributes annotate assemblies, types and members with a constructor call: an
//! attribute class, the constructor that was used and its argument values, plus optional
//! named field/property assignments. Only the decoded form is modelled here; blob encoding
//! is the concern of the metadata writer.
//!
//! # Examples
//!
//! ```rust
//! use dotstamp::metadata::customattributes::{CustomAttribute, CustomAttributeArgument};
//!
//! let mut title = CustomAttribute::with_string_argument(
//!     "System.Reflection.AssemblyTitleAttribute",
//!     "Old",
//! );
//! title.set_first_argument(CustomAttributeArgument::String("New".to_string()));
//! assert_eq!(title.first_argument().and_then(|a| a.as_str()), Some("New"));
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 22.10 - CustomAttribute

mod types;

pub use types::*;
