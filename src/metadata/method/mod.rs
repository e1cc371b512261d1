//! Method definitions and their parameters.

use std::sync::Arc;

use crate::{
    metadata::{signatures::TypeSignature, typesystem::NameFormatter},
    Result,
};

/// A reference to a `Method`
pub type MethodRc = Arc<Method>;

/// A single parameter of a `Method`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodParam {
    /// The name of the parameter (can be empty)
    pub name: String,
    /// The type of the parameter
    pub base: TypeSignature,
    /// This is the implicit `this` receiver of an instance method
    pub is_hidden_this: bool,
}

impl MethodParam {
    /// Creates a regular parameter
    pub fn new(name: impl Into<String>, base: TypeSignature) -> Self {
        MethodParam {
            name: name.into(),
            base,
            is_hidden_this: false,
        }
    }

    /// Creates the implicit `this` receiver of type `declaring`
    #[must_use]
    pub fn hidden_this(declaring: TypeSignature) -> Self {
        MethodParam {
            name: "this".to_string(),
            base: declaring,
            is_hidden_this: true,
        }
    }
}

/// Represents a method definition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Method {
    /// The name of the method
    pub name: String,
    /// The parameters in declaration order, including the implicit receiver if present
    pub params: Vec<MethodParam>,
    /// The return type of this `Method`
    pub return_type: TypeSignature,
}

impl Method {
    /// Creates a method without parameters returning `void`
    pub fn new(name: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            params: Vec::new(),
            return_type: TypeSignature::Void,
        }
    }

    /// Parameters that are declared explicitly, i.e. without the implicit receiver
    pub fn declared_params(&self) -> impl Iterator<Item = &MethodParam> {
        self.params.iter().filter(|param| !param.is_hidden_this)
    }

    /// The display name of this method, see [`NameFormatter::format_method`]
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if a parameter type nests too deeply
    pub fn extended_name(&self, include_return_type: bool) -> Result<String> {
        NameFormatter::default().format_method(self, include_return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_params_skip_receiver() {
        let method = Method {
            name: "Invoke".to_string(),
            params: vec![
                MethodParam::hidden_this(TypeSignature::class("App", "Handler")),
                MethodParam::new("value", TypeSignature::I4),
            ],
            return_type: TypeSignature::Void,
        };

        let declared: Vec<_> = method.declared_params().map(|p| p.name.as_str()).collect();
        assert_eq!(declared, vec!["value"]);
    }
}
