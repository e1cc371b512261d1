//! CustomAttribute-specific types and data structures.
//!
//! This module contains the types used for representing custom attribute entries, their
//! constructor reference, argument values and named arguments.

use crate::metadata::signatures::TypeSignature;

/// Represents the argument values of a custom attribute
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomAttributeValue {
    /// Fixed arguments from the constructor signature
    pub fixed_args: Vec<CustomAttributeArgument>,
    /// Named arguments (fields and properties)
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

/// Represents a single custom attribute argument value
#[derive(Debug, Clone, PartialEq)]
pub enum CustomAttributeArgument {
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 8-bit integer
    I1(i8),
    /// Unsigned 8-bit integer
    U1(u8),
    /// Signed 16-bit integer
    I2(i16),
    /// Unsigned 16-bit integer
    U2(u16),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Type reference (as string)
    Type(String),
    /// Array of arguments
    Array(Vec<CustomAttributeArgument>),
    /// Enum value (base type + value)
    Enum(String, Box<CustomAttributeArgument>),
}

impl CustomAttributeArgument {
    /// Returns the text if this is a string argument
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CustomAttributeArgument::String(value) => Some(value),
            _ => None,
        }
    }
}

/// Represents a named argument (field or property) in a custom attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}

/// The constructor a custom attribute is instantiated with
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomAttributeCtor {
    /// Full name of the type declaring the constructor
    pub declaring_type: String,
    /// The constructor's parameter types
    pub params: Vec<TypeSignature>,
}

impl CustomAttributeCtor {
    /// The `.ctor(string)` of `declaring_type`
    pub fn string(declaring_type: impl Into<String>) -> Self {
        CustomAttributeCtor {
            declaring_type: declaring_type.into(),
            params: vec![TypeSignature::String],
        }
    }
}

/// A custom attribute attached to a metadata entity
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttribute {
    /// Full name of the attribute class
    pub attribute_type: String,
    /// The constructor reference; unresolved references are `None`
    pub constructor: Option<CustomAttributeCtor>,
    /// Constructor and named argument values
    pub value: CustomAttributeValue,
}

impl CustomAttribute {
    /// Creates an attribute of `attribute_type` without constructor reference or arguments
    pub fn new(attribute_type: impl Into<String>) -> Self {
        CustomAttribute {
            attribute_type: attribute_type.into(),
            constructor: None,
            value: CustomAttributeValue::default(),
        }
    }

    /// Creates an attribute instantiated through `.ctor(string)` with `value` as its only
    /// argument
    pub fn with_string_argument(attribute_type: impl Into<String>, value: impl Into<String>) -> Self {
        let attribute_type = attribute_type.into();
        CustomAttribute {
            constructor: Some(CustomAttributeCtor::string(attribute_type.clone())),
            attribute_type,
            value: CustomAttributeValue {
                fixed_args: vec![CustomAttributeArgument::String(value.into())],
                named_args: Vec::new(),
            },
        }
    }

    /// The first constructor argument, if any
    #[must_use]
    pub fn first_argument(&self) -> Option<&CustomAttributeArgument> {
        self.value.fixed_args.first()
    }

    /// Replaces the value of the first constructor argument.
    ///
    /// Returns `false` without touching anything if the attribute has no constructor
    /// arguments.
    pub fn set_first_argument(&mut self, value: CustomAttributeArgument) -> bool {
        match self.value.fixed_args.first_mut() {
            Some(first) => {
                *first = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_first_argument_keeps_the_rest() {
        let mut attribute = CustomAttribute::new("App.PairAttribute");
        attribute.value.fixed_args = vec![
            CustomAttributeArgument::String("a".to_string()),
            CustomAttributeArgument::I4(2),
        ];

        assert!(attribute.set_first_argument(CustomAttributeArgument::String("b".to_string())));
        assert_eq!(attribute.first_argument().and_then(|a| a.as_str()), Some("b"));
        assert_eq!(attribute.value.fixed_args[1], CustomAttributeArgument::I4(2));
    }

    #[test]
    fn set_first_argument_without_arguments() {
        let mut attribute = CustomAttribute::new("App.MarkerAttribute");
        assert!(!attribute.set_first_argument(CustomAttributeArgument::Bool(true)));
        assert!(attribute.value.fixed_args.is_empty());
    }

    #[test]
    fn string_argument_instance() {
        let attribute = CustomAttribute::with_string_argument(
            "System.Reflection.AssemblyTitleAttribute",
            "Title",
        );
        assert_eq!(
            attribute.constructor,
            Some(CustomAttributeCtor {
                declaring_type: "System.Reflection.AssemblyTitleAttribute".to_string(),
                params: vec![TypeSignature::String],
            })
        );
        assert_eq!(attribute.first_argument().and_then(|a| a.as_str()), Some("Title"));
    }
}
