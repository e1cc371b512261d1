// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # dotstamp
//!
//! Display-name reconstruction and descriptive metadata stamping for .NET assemblies.
//!
//! Metadata stores generic types under their arity-suffixed name (``List`1``) and keeps the
//! instantiated arguments in separate signature records. `dotstamp` puts the pieces back
//! together into readable names such as `List<Int32>` or `Foo<T>: Base<Int32>`, and it
//! rewrites the descriptive information an assembly carries about itself: the
//! `System.Reflection.Assembly*Attribute` custom attributes and the version-info strings in
//! the PE resource section.
//!
//! ## Features
//!
//! - **Extended names** - Types, type definitions and methods rendered with their generic
//!   arguments, generic parameters and base type
//! - **Accessor collection** - Property and event accessors gathered in declaration order
//! - **Assembly information** - Find, create or update the standard descriptive attributes
//! - **Version resources** - Patch PE version-info strings through a pluggable patcher, with
//!   an external-tool implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use dotstamp::prelude::*;
//!
//! let list = TypeSignature::generic_inst(
//!     TypeSignature::class("System.Collections.Generic", "List`1"),
//!     vec![TypeSignature::I4],
//! );
//! assert_eq!(list.extended_name()?, "List<Int32>");
//! # Ok::<(), dotstamp::Error>(())
//! ```
//!
//! ### Updating assembly information
//!
//! ```rust
//! use dotstamp::prelude::*;
//!
//! let mut assembly = Assembly::new("Sample");
//! let info = AssemblyInformation {
//!     company: Some("Contoso".to_string()),
//!     ..Default::default()
//! };
//!
//! let applied = AssemblyInfoEditor::new(AttributePolicy::CreateIfMissing)
//!     .apply(&mut assembly, &info)?;
//! assert_eq!(applied, vec![AssemblyInfoField::Company]);
//! # Ok::<(), dotstamp::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The metadata object model both components work on
//! - [`metadata::typesystem::NameFormatter`] - Extended-name reconstruction
//! - [`editor`] - Assembly attribute and PE resource editing
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade; install any
//! logger in the host application to see which fields were applied, skipped or patched.
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotstamp::prelude::*;
///
/// let formatter = NameFormatter::default();
/// assert_eq!(formatter.format_type_signature(Some(&TypeSignature::String))?, "String");
/// # Ok::<(), dotstamp::Error>(())
/// ```
pub mod prelude;

/// The metadata object model: signatures, types, methods, members, custom attributes and
/// the assembly container.
///
/// The model is owned and built by the caller (a metadata loader, or a test). It carries
/// exactly what name formatting and attribute editing read and write.
///
/// # Key Components
///
/// - [`metadata::signatures`] - [`metadata::signatures::TypeSignature`] and friends
/// - [`metadata::typesystem`] - Type definitions and the [`metadata::typesystem::NameFormatter`]
/// - [`metadata::method`] - Method definitions and parameters
/// - [`metadata::members`] - Properties and events with their accessor slots
/// - [`metadata::customattributes`] - Custom attribute entries and argument values
/// - [`metadata::Assembly`] - The assembly and its custom-attribute collection
pub mod metadata;

/// Editing of descriptive assembly metadata.
///
/// - [`editor::AssemblyInfoEditor`] applies an [`editor::AssemblyInformation`] record onto the
///   custom attributes of an [`metadata::Assembly`]
/// - [`editor::ResourceEditor`] applies a [`editor::VersionResourceInformation`] record onto a
///   PE file or image through a [`editor::ResourcePatcher`]
///
/// # Examples
///
/// ```rust,no_run
/// use dotstamp::editor::{
///     apply_resource_information, ResourcePatchConfig, ResourceTarget, VersionResourceInformation,
/// };
///
/// # let tool_image: &[u8] = &[];
/// let info = VersionResourceInformation {
///     product_name: Some("Sample".to_string()),
///     ..Default::default()
/// };
/// let image = std::fs::read("sample.dll")?;
/// let patched = apply_resource_information(
///     ResourceTarget::Image(image),
///     &info,
///     tool_image,
///     &ResourcePatchConfig::default(),
/// )?;
/// # Ok::<(), dotstamp::Error>(())
/// ```
pub mod editor;

/// `dotstamp` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotstamp` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;
