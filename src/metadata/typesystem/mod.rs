//! .NET type definitions and their display names.
//!
//! # Key Components
//!
//! - [`CilType`]: A declared type with its generic parameters, base type and members
//! - [`GenericParam`]: A declared (uninstantiated) generic parameter
//! - [`NameFormatter`]: Reconstructs readable names for signatures, types and methods
//!
//! # Examples
//!
//! ```rust
//! use dotstamp::metadata::{
//!     signatures::TypeSignature,
//!     typesystem::{CilType, GenericParam},
//! };
//!
//! let base = TypeSignature::generic_inst(
//!     TypeSignature::class("App", "Base`1"),
//!     vec![TypeSignature::I4],
//! );
//! let ty = CilType::new("App", "Foo`1", Some(base));
//! ty.generic_params.push(GenericParam::new(0, "T").into());
//!
//! assert_eq!(ty.extended_name()?, "Foo<T>: Base<Int32>");
//! # Ok::<(), dotstamp::Error>(())
//! ```

mod naming;

use std::sync::Arc;

pub use naming::{
    collect_accessor_methods, strip_arity, AccessorSlots, NameFormatter, MAX_NESTING_DEPTH,
};

use crate::{
    metadata::{
        members::{EventList, PropertyList},
        method::MethodRc,
        signatures::TypeSignature,
    },
    Result,
};

/// A reference to a `CilType`
pub type CilTypeRc = Arc<CilType>;
/// A reference to a `GenericParam`
pub type GenericParamRc = Arc<GenericParam>;
/// A vector that holds a list of `GenericParam`
pub type GenericParamList = Arc<boxcar::Vec<GenericParamRc>>;
/// A vector that holds a list of `Method`
pub type MethodRefList = Arc<boxcar::Vec<MethodRc>>;

/// A generic parameter as declared on a type or method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParam {
    /// 2-byte index of the generic parameter, numbered left-to-right, from zero
    pub number: u32,
    /// The name of the generic parameter
    pub name: String,
}

impl GenericParam {
    /// Creates a generic parameter at position `number`
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        GenericParam {
            number,
            name: name.into(),
        }
    }
}

/// Represents a declared type, close to a `TypeDef` row with its resolved relations.
pub struct CilType {
    /// `TypeNamespace` (can be empty, e.g. for nested types)
    pub namespace: String,
    /// `TypeName`, as stored in metadata (generic types carry their arity marker)
    pub name: String,
    /// This types base aka 'extends'
    base: Option<TypeSignature>,
    /// All generic parameters this type declares
    pub generic_params: GenericParamList,
    /// All methods this type has
    pub methods: MethodRefList,
    /// All properties this type has
    pub properties: PropertyList,
    /// All events this type has
    pub events: EventList,
}

impl CilType {
    /// Create a new instance of a `CilType`
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        base: Option<TypeSignature>,
    ) -> Self {
        CilType {
            namespace: namespace.into(),
            name: name.into(),
            base,
            generic_params: Arc::new(boxcar::Vec::new()),
            methods: Arc::new(boxcar::Vec::new()),
            properties: Arc::new(boxcar::Vec::new()),
            events: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Access the base type of this type, if it exists
    #[must_use]
    pub fn base(&self) -> Option<&TypeSignature> {
        self.base.as_ref()
    }

    /// Returns the full name (Namespace.Name) of the entity
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// The display name of this type, see [`NameFormatter::format_type_definition`]
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if the base type nests too deeply
    pub fn extended_name(&self) -> Result<String> {
        NameFormatter::default().format_type_definition(self)
    }
}

impl TypeSignature {
    /// The display name of this signature, see [`NameFormatter::format_type_signature`]
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if the generic arguments nest too deeply
    pub fn extended_name(&self) -> Result<String> {
        NameFormatter::default().format_type_signature(Some(self))
    }
}
