//! Extended-name reconstruction for signatures, type definitions and methods.
//!
//! Metadata stores a generic type under its arity-suffixed name (``Dictionary`2``) and keeps
//! the instantiated arguments in the signature. The [`NameFormatter`] strips the arity marker
//! and re-attaches the arguments, recursively, so that a field of type
//! `Dictionary<string, List<int>>` renders as `Dictionary<String, List<Int32>>`.
//!
//! All operations are pure: inputs are only borrowed, nothing is cached, and a formatter can
//! be shared freely between threads.

use crate::{
    metadata::{method::Method, method::MethodRc, signatures::TypeSignature},
    Error::RecursionLimit,
    Result,
};

use super::CilType;

/// Default limit for nested generic argument levels
pub const MAX_NESTING_DEPTH: usize = 64;

/// Removes a trailing generic-arity marker from a metadata name.
///
/// The marker is a back-tick followed by one or more digits, optionally followed by `[]`,
/// at the very end of the name. Exactly that suffix is removed; names without a marker are
/// returned unchanged.
///
/// ```rust
/// use dotstamp::metadata::typesystem::strip_arity;
///
/// assert_eq!(strip_arity("List`1"), "List");
/// assert_eq!(strip_arity("List`1[]"), "List");
/// assert_eq!(strip_arity("Int32[]"), "Int32[]");
/// assert_eq!(strip_arity("Odd`name"), "Odd`name");
/// ```
#[must_use]
pub fn strip_arity(name: &str) -> &str {
    let body = name.strip_suffix("[]").unwrap_or(name);
    match body.rfind('`') {
        Some(tick) => {
            let digits = &body[tick + 1..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &name[..tick]
            } else {
                name
            }
        }
        None => name,
    }
}

/// Whether unset accessor slots show up in [`collect_accessor_methods`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessorSlots {
    /// Every slot yields an entry, unset slots as `None` placeholders
    #[default]
    IncludeAbsent,
    /// Unset slots are dropped, every entry is `Some`
    SkipAbsent,
}

/// Collects all accessor methods of a type.
///
/// Properties come first, in declaration order, each contributing its getter, its setter and
/// then its `other` accessors. Events follow, each contributing add, remove, raise and then
/// its `other` accessors.
///
/// With [`AccessorSlots::IncludeAbsent`] the slot structure is kept intact: a read-only
/// property still contributes two entries, the second being `None`.
#[must_use]
pub fn collect_accessor_methods(ty: &CilType, slots: AccessorSlots) -> Vec<Option<MethodRc>> {
    let mut accessors = Vec::new();

    for (_, property) in ty.properties.iter() {
        accessors.push(property.fn_getter.get().cloned());
        accessors.push(property.fn_setter.get().cloned());
        accessors.extend(property.fn_other.iter().map(|(_, m)| Some(m.clone())));
    }

    for (_, event) in ty.events.iter() {
        accessors.push(event.fn_on_add.get().cloned());
        accessors.push(event.fn_on_remove.get().cloned());
        accessors.push(event.fn_on_raise.get().cloned());
        accessors.extend(event.fn_other.iter().map(|(_, m)| Some(m.clone())));
    }

    if slots == AccessorSlots::SkipAbsent {
        accessors.retain(Option::is_some);
    }
    accessors
}

/// Renders display names for signatures, type definitions and methods.
///
/// # Examples
///
/// ```rust
/// use dotstamp::metadata::{signatures::TypeSignature, typesystem::NameFormatter};
///
/// let dict = TypeSignature::generic_inst(
///     TypeSignature::class("System.Collections.Generic", "Dictionary`2"),
///     vec![
///         TypeSignature::String,
///         TypeSignature::generic_inst(
///             TypeSignature::class("System.Collections.Generic", "List`1"),
///             vec![TypeSignature::I4],
///         ),
///     ],
/// );
///
/// let formatter = NameFormatter::default();
/// assert_eq!(
///     formatter.format_type_signature(Some(&dict))?,
///     "Dictionary<String, List<Int32>>"
/// );
/// assert_eq!(formatter.format_type_signature(None)?, "");
/// # Ok::<(), dotstamp::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameFormatter {
    max_depth: usize,
}

impl Default for NameFormatter {
    fn default() -> Self {
        NameFormatter {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl NameFormatter {
    /// Creates a formatter with the default nesting limit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how many levels of nested generic arguments are followed
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The configured nesting limit
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Formats a type signature including its generic arguments.
    ///
    /// An absent signature yields an empty string.
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if generic arguments are nested deeper than
    /// the configured limit
    pub fn format_type_signature(&self, signature: Option<&TypeSignature>) -> Result<String> {
        match signature {
            Some(signature) => self.format_signature(signature, 0),
            None => Ok(String::new()),
        }
    }

    /// Formats a type definition as `Name<P1, P2>: Base<Args>`.
    ///
    /// The generic parameter clause is only present if the type declares parameters, the
    /// base clause only if the type has a base type.
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if the base type signature nests too deeply
    pub fn format_type_definition(&self, ty: &CilType) -> Result<String> {
        let mut name = strip_arity(&ty.name).to_string();

        let params: Vec<&str> = ty
            .generic_params
            .iter()
            .map(|(_, param)| strip_arity(&param.name))
            .collect();
        if !params.is_empty() {
            name.push('<');
            name.push_str(&params.join(", "));
            name.push('>');
        }

        if let Some(base) = ty.base() {
            name.push_str(": ");
            name.push_str(&self.format_type_signature(Some(base))?);
        }

        Ok(name)
    }

    /// Formats a method as `Name(Param1, Param2)` or `Name(Param1, Param2): Return`.
    ///
    /// The implicit `this` receiver is never listed, wherever it appears in the parameter
    /// list.
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if a parameter or the return type nests too
    /// deeply
    pub fn format_method(&self, method: &Method, include_return_type: bool) -> Result<String> {
        let params = method
            .declared_params()
            .map(|param| self.format_type_signature(Some(&param.base)))
            .collect::<Result<Vec<_>>>()?
            .join(", ");

        if include_return_type {
            Ok(format!(
                "{}({}): {}",
                method.name,
                params,
                self.format_type_signature(Some(&method.return_type))?
            ))
        } else {
            Ok(format!("{}({})", method.name, params))
        }
    }

    fn format_signature(&self, signature: &TypeSignature, depth: usize) -> Result<String> {
        if depth > self.max_depth {
            return Err(RecursionLimit(self.max_depth));
        }

        let mut name = strip_arity(&signature.type_name()).to_string();

        let args = signature.generic_args();
        if !args.is_empty() {
            name.push('<');
            for (index, arg) in args.iter().enumerate() {
                if index > 0 {
                    name.push_str(", ");
                }

                let formatted = self.format_signature(arg, depth + 1)?;
                if formatted.is_empty() {
                    name.push_str(strip_arity(&arg.type_name()));
                } else {
                    name.push_str(&formatted);
                }
            }
            name.push('>');
        }

        Ok(name)
    }
}
