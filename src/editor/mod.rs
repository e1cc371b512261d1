//! Editing the descriptive information of a compiled assembly.
//!
//! The same information lives in two places of a .NET binary, and each has its own editor:
//!
//! - [`AssemblyInfoEditor`] rewrites the `System.Reflection.Assembly*Attribute` custom
//!   attributes in the metadata object model. Writing the modified metadata back to disk is
//!   left to the metadata writer.
//! - [`ResourceEditor`] rewrites the Win32 `VERSIONINFO` resource in the PE file through a
//!   [`ResourcePatcher`], by default the external [`PatchTool`].
//!
//! [`apply_resource_information`] bundles the common case of a patch tool that is shipped as
//! an embedded image.
//!
//! # Examples
//!
//! ```rust
//! use dotstamp::prelude::*;
//!
//! let mut assembly = Assembly::new("Sample");
//! assembly.add_custom_attribute(CustomAttribute::with_string_argument(
//!     "System.Reflection.AssemblyTitleAttribute",
//!     "Old title",
//! ));
//!
//! update_constructor_argument(
//!     &mut assembly,
//!     "System.Reflection.AssemblyTitleAttribute",
//!     "New title",
//! )?;
//! # Ok::<(), dotstamp::Error>(())
//! ```

mod assembly;
mod config;
mod patcher;
mod resource;

pub use assembly::{
    update_constructor_argument, AssemblyInfoEditor, AssemblyInfoField, AssemblyInformation,
    AttributePolicy,
};
pub use config::ResourcePatchConfig;
pub use patcher::{PatchTool, ResourceEdit, ResourcePatcher};
pub use resource::{
    apply_resource_information, ResourceEditor, ResourceField, ResourceTarget,
    VersionResourceInformation,
};
