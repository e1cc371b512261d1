//! # dotstamp Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotstamp library. Import it to get quick access to the metadata model, the name
//! formatter and both editors.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotstamp operations
pub use crate::Error;

/// The result type used throughout dotstamp
pub use crate::Result;

// ================================================================================================
// Metadata Model
// ================================================================================================

/// The assembly and its custom-attribute collection
pub use crate::metadata::Assembly;

/// Type signatures
pub use crate::metadata::signatures::{
    SignatureArray, SignatureGenericParam, SignatureTypeName, TypeSignature,
};

/// Type definitions
pub use crate::metadata::typesystem::{CilType, CilTypeRc, GenericParam};

/// Methods, properties and events
pub use crate::metadata::{
    members::{Event, EventRc, Property, PropertyRc},
    method::{Method, MethodParam, MethodRc},
};

/// Custom attributes
pub use crate::metadata::customattributes::{
    CustomAttribute, CustomAttributeArgument, CustomAttributeCtor, CustomAttributeNamedArgument,
    CustomAttributeValue,
};

// ================================================================================================
// Name Formatting
// ================================================================================================

/// Extended-name reconstruction
pub use crate::metadata::typesystem::{
    collect_accessor_methods, strip_arity, AccessorSlots, NameFormatter,
};

// ================================================================================================
// Editing
// ================================================================================================

/// Assembly information attributes
pub use crate::editor::{
    update_constructor_argument, AssemblyInfoEditor, AssemblyInfoField, AssemblyInformation,
    AttributePolicy,
};

/// Version-info resources
pub use crate::editor::{
    apply_resource_information, PatchTool, ResourceEdit, ResourceEditor, ResourceField,
    ResourcePatchConfig, ResourcePatcher, ResourceTarget, VersionResourceInformation,
};
