/// The namespace and (raw) name of a class or value type referenced from a signature.
///
/// The name is stored the way metadata stores it, so generic types keep their arity marker
/// (``List`1``).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureTypeName {
    /// `TypeNamespace`, can be empty
    pub namespace: String,
    /// `TypeName`, as stored in metadata
    pub name: String,
}

impl SignatureTypeName {
    /// Returns the full name (Namespace.Name) of the referenced type
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }
}

/// A generic parameter referenced from a signature (`!n` or `!!n`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureGenericParam {
    /// Position in the owner's generic parameter list
    pub number: u32,
    /// Resolved parameter name, if the owner was available while building the signature
    pub name: Option<String>,
}

/// A multi-dimensional array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureArray {
    /// The type in the array
    pub base: Box<TypeSignature>,
    /// The number of dimensions
    pub rank: u32,
}

/// Represents a type as it appears in signatures
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeSignature {
    #[default]
    /// Not defined
    Unknown,
    /// void
    Void,
    /// bool
    Boolean,
    /// char
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// System.String
    String,
    /// System.Object
    Object,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// Type is referenced during runtime
    TypedByRef,
    /// CIL value-type
    ValueType(SignatureTypeName),
    /// CIL Class
    Class(SignatureTypeName),
    /// Generic type parameter
    GenericParamType(SignatureGenericParam),
    /// Generic method parameter
    GenericParamMethod(SignatureGenericParam),
    /// Generic type and its arguments
    GenericInst(Box<TypeSignature>, Vec<TypeSignature>),
    /// Single dimension array
    SzArray(Box<TypeSignature>),
    /// Multi-dimensional array
    Array(SignatureArray),
    /// A pointer to a type
    Ptr(Box<TypeSignature>),
    /// Type by reference
    ByRef(Box<TypeSignature>),
    /// A pinned type
    Pinned(Box<TypeSignature>),
}

impl TypeSignature {
    /// Creates a class signature for `namespace.name`
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeSignature::Class(SignatureTypeName {
            namespace: namespace.into(),
            name: name.into(),
        })
    }

    /// Creates a value-type signature for `namespace.name`
    pub fn value_type(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeSignature::ValueType(SignatureTypeName {
            namespace: namespace.into(),
            name: name.into(),
        })
    }

    /// Creates a generic instantiation of `generic` with the given arguments
    #[must_use]
    pub fn generic_inst(generic: TypeSignature, args: Vec<TypeSignature>) -> Self {
        TypeSignature::GenericInst(Box::new(generic), args)
    }

    /// The name of this type as metadata stores it.
    ///
    /// Primitives use their runtime type name (`Int32`, `String`, ...), named types return
    /// their stored name including any arity marker, a generic instantiation returns the
    /// name of its generic type, and arrays, pointers and by-refs decorate the name of the
    /// element type (`[]`, `[,]`, `*`, `&`). Generic parameters fall back to `!n` / `!!n`
    /// when their name is not known.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            TypeSignature::Unknown => String::new(),
            TypeSignature::Void => "Void".to_string(),
            TypeSignature::Boolean => "Boolean".to_string(),
            TypeSignature::Char => "Char".to_string(),
            TypeSignature::I1 => "SByte".to_string(),
            TypeSignature::U1 => "Byte".to_string(),
            TypeSignature::I2 => "Int16".to_string(),
            TypeSignature::U2 => "UInt16".to_string(),
            TypeSignature::I4 => "Int32".to_string(),
            TypeSignature::U4 => "UInt32".to_string(),
            TypeSignature::I8 => "Int64".to_string(),
            TypeSignature::U8 => "UInt64".to_string(),
            TypeSignature::R4 => "Single".to_string(),
            TypeSignature::R8 => "Double".to_string(),
            TypeSignature::String => "String".to_string(),
            TypeSignature::Object => "Object".to_string(),
            TypeSignature::I => "IntPtr".to_string(),
            TypeSignature::U => "UIntPtr".to_string(),
            TypeSignature::TypedByRef => "TypedReference".to_string(),
            TypeSignature::ValueType(named) | TypeSignature::Class(named) => named.name.clone(),
            TypeSignature::GenericParamType(param) => match &param.name {
                Some(name) => name.clone(),
                None => format!("!{}", param.number),
            },
            TypeSignature::GenericParamMethod(param) => match &param.name {
                Some(name) => name.clone(),
                None => format!("!!{}", param.number),
            },
            TypeSignature::GenericInst(generic, _) => generic.type_name(),
            TypeSignature::SzArray(base) => format!("{}[]", base.type_name()),
            TypeSignature::Array(array) => format!(
                "{}[{}]",
                array.base.type_name(),
                ",".repeat(array.rank.saturating_sub(1) as usize)
            ),
            TypeSignature::Ptr(base) => format!("{}*", base.type_name()),
            TypeSignature::ByRef(base) => format!("{}&", base.type_name()),
            TypeSignature::Pinned(base) => base.type_name(),
        }
    }

    /// Returns the generic type and its arguments if this signature is a generic
    /// instantiation, looking through `pinned`
    #[must_use]
    pub fn as_generic_inst(&self) -> Option<(&TypeSignature, &[TypeSignature])> {
        match self {
            TypeSignature::GenericInst(generic, args) => Some((generic.as_ref(), args.as_slice())),
            TypeSignature::Pinned(inner) => inner.as_generic_inst(),
            _ => None,
        }
    }

    /// The generic arguments of this signature, empty unless it is a generic instantiation
    #[must_use]
    pub fn generic_args(&self) -> &[TypeSignature] {
        self.as_generic_inst().map_or(&[], |(_, args)| args)
    }
}
