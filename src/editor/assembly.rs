//! Assembly information stored as `System.Reflection.Assembly*Attribute` custom attributes.
//!
//! Every field of [`AssemblyInformation`] corresponds to one standard attribute whose single
//! constructor argument carries the text, e.g. `[assembly: AssemblyCompany("Contoso")]`.
//! Applying a record rewrites that argument; what happens when the attribute is missing is
//! decided by the [`AttributePolicy`].

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    metadata::{
        customattributes::{CustomAttribute, CustomAttributeArgument},
        Assembly,
    },
    Error::{AttributeNotFound, InvalidArgument},
    Result,
};

/// The descriptive assembly fields, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum AssemblyInfoField {
    /// `AssemblyCompanyAttribute`
    Company,
    /// `AssemblyConfigurationAttribute`
    Configuration,
    /// `AssemblyCopyrightAttribute`
    Copyright,
    /// `AssemblyDescriptionAttribute`
    Description,
    /// `AssemblyFileVersionAttribute`
    FileVersion,
    /// `AssemblyProductAttribute`
    Product,
    /// `AssemblyTitleAttribute`
    Title,
    /// `AssemblyTrademarkAttribute`
    Trademark,
    /// `AssemblyVersionAttribute`
    Version,
}

impl AssemblyInfoField {
    /// Full name of the attribute class that stores this field
    #[must_use]
    pub fn attribute_type(self) -> &'static str {
        match self {
            AssemblyInfoField::Company => "System.Reflection.AssemblyCompanyAttribute",
            AssemblyInfoField::Configuration => "System.Reflection.AssemblyConfigurationAttribute",
            AssemblyInfoField::Copyright => "System.Reflection.AssemblyCopyrightAttribute",
            AssemblyInfoField::Description => "System.Reflection.AssemblyDescriptionAttribute",
            AssemblyInfoField::FileVersion => "System.Reflection.AssemblyFileVersionAttribute",
            AssemblyInfoField::Product => "System.Reflection.AssemblyProductAttribute",
            AssemblyInfoField::Title => "System.Reflection.AssemblyTitleAttribute",
            AssemblyInfoField::Trademark => "System.Reflection.AssemblyTrademarkAttribute",
            AssemblyInfoField::Version => "System.Reflection.AssemblyVersionAttribute",
        }
    }
}

/// The descriptive information of an assembly.
///
/// `None` leaves the corresponding attribute untouched, any other value (including an empty
/// string) is written as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssemblyInformation {
    /// Assembly Company
    pub company: Option<String>,
    /// Assembly Configuration
    pub configuration: Option<String>,
    /// Assembly Copyright
    pub copyright: Option<String>,
    /// Assembly Description
    pub description: Option<String>,
    /// Assembly File Version
    pub file_version: Option<String>,
    /// Assembly Product
    pub product: Option<String>,
    /// Assembly Title
    pub title: Option<String>,
    /// Assembly Trademark
    pub trademark: Option<String>,
    /// Assembly Version
    pub version: Option<String>,
}

impl AssemblyInformation {
    /// The value of `field`, if set
    #[must_use]
    pub fn get(&self, field: AssemblyInfoField) -> Option<&str> {
        match field {
            AssemblyInfoField::Company => self.company.as_deref(),
            AssemblyInfoField::Configuration => self.configuration.as_deref(),
            AssemblyInfoField::Copyright => self.copyright.as_deref(),
            AssemblyInfoField::Description => self.description.as_deref(),
            AssemblyInfoField::FileVersion => self.file_version.as_deref(),
            AssemblyInfoField::Product => self.product.as_deref(),
            AssemblyInfoField::Title => self.title.as_deref(),
            AssemblyInfoField::Trademark => self.trademark.as_deref(),
            AssemblyInfoField::Version => self.version.as_deref(),
        }
    }

    /// All set fields with their values, in application order
    pub fn fields(&self) -> impl Iterator<Item = (AssemblyInfoField, &str)> {
        AssemblyInfoField::iter().filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// `true` if no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}

/// What to do when the attribute for a set field is missing or unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributePolicy {
    /// Only rewrite attributes that exist with a constructor and at least one argument;
    /// everything else is skipped
    #[default]
    UpdateOnly,
    /// Append a new `.ctor(string)` instance when the attribute is missing, and replace an
    /// entry without constructor or without arguments by such an instance
    CreateIfMissing,
}

enum AttributeSlot {
    Missing,
    Unusable(usize),
    Usable,
}

fn classify(assembly: &Assembly, attribute_type: &str) -> AttributeSlot {
    match assembly.position_custom_attribute(attribute_type) {
        None => AttributeSlot::Missing,
        Some(index) => {
            let attribute = &assembly.custom_attributes[index];
            if attribute.constructor.is_none() || attribute.value.fixed_args.is_empty() {
                AttributeSlot::Unusable(index)
            } else {
                AttributeSlot::Usable
            }
        }
    }
}

/// Applies [`AssemblyInformation`] records onto the custom attributes of an [`Assembly`].
///
/// Only the first constructor argument of the matched attribute is rewritten; the remaining
/// arguments, named arguments and all other entries of the collection stay as they are.
///
/// # Examples
///
/// ```rust
/// use dotstamp::{
///     editor::{AssemblyInfoEditor, AssemblyInfoField, AssemblyInformation, AttributePolicy},
///     metadata::{customattributes::CustomAttribute, Assembly},
/// };
///
/// let mut assembly = Assembly::new("Sample");
/// assembly.add_custom_attribute(CustomAttribute::with_string_argument(
///     "System.Reflection.AssemblyVersionAttribute",
///     "1.0.0.0",
/// ));
///
/// let info = AssemblyInformation {
///     version: Some("2.0.0.0".to_string()),
///     title: Some("Sample".to_string()),
///     ..Default::default()
/// };
///
/// // The title attribute does not exist, so it is skipped
/// let applied = AssemblyInfoEditor::new(AttributePolicy::UpdateOnly).apply(&mut assembly, &info)?;
/// assert_eq!(applied, vec![AssemblyInfoField::Version]);
/// # Ok::<(), dotstamp::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyInfoEditor {
    policy: AttributePolicy,
}

impl AssemblyInfoEditor {
    /// Creates an editor with the given find-or-create policy
    #[must_use]
    pub fn new(policy: AttributePolicy) -> Self {
        AssemblyInfoEditor { policy }
    }

    /// The policy of this editor
    #[must_use]
    pub fn policy(&self) -> AttributePolicy {
        self.policy
    }

    /// Writes every set field of `info` into the matching attribute of `assembly`.
    ///
    /// Returns the fields that were written, in application order.
    ///
    /// # Errors
    /// Returns an error if an attribute update fails; fields applied before the failure stay
    /// applied
    pub fn apply(
        &self,
        assembly: &mut Assembly,
        info: &AssemblyInformation,
    ) -> Result<Vec<AssemblyInfoField>> {
        let mut applied = Vec::with_capacity(AssemblyInfoField::COUNT);

        for (field, value) in info.fields() {
            if self.apply_field(assembly, field.attribute_type(), value)? {
                applied.push(field);
            }
        }

        Ok(applied)
    }

    fn apply_field(&self, assembly: &mut Assembly, attribute_type: &str, value: &str) -> Result<bool> {
        match (classify(assembly, attribute_type), self.policy) {
            (AttributeSlot::Usable, _) => {
                update_constructor_argument(assembly, attribute_type, value)?;
                log::debug!("{attribute_type}: updated to {value:?}");
            }
            (AttributeSlot::Missing, AttributePolicy::CreateIfMissing) => {
                assembly.add_custom_attribute(CustomAttribute::with_string_argument(
                    attribute_type,
                    value,
                ));
                log::debug!("{attribute_type}: created with {value:?}");
            }
            (AttributeSlot::Unusable(index), AttributePolicy::CreateIfMissing) => {
                assembly.replace_custom_attribute(
                    index,
                    CustomAttribute::with_string_argument(attribute_type, value),
                );
                log::debug!("{attribute_type}: replaced with {value:?}");
            }
            (AttributeSlot::Missing | AttributeSlot::Unusable(_), AttributePolicy::UpdateOnly) => {
                log::debug!("{attribute_type}: not present or without arguments, skipped");
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Sets the first constructor argument of the attribute named `attribute_type` to `value`.
///
/// Only the first matching entry is changed.
///
/// # Errors
/// - [`crate::Error::InvalidArgument`] if `attribute_type` is empty or the attribute has no
///   constructor arguments
/// - [`crate::Error::AttributeNotFound`] if the assembly carries no such attribute
pub fn update_constructor_argument(
    assembly: &mut Assembly,
    attribute_type: &str,
    value: &str,
) -> Result<()> {
    if attribute_type.is_empty() {
        return Err(InvalidArgument("attribute type name is empty".to_string()));
    }

    let attribute = assembly
        .find_custom_attribute_mut(attribute_type)
        .ok_or_else(|| AttributeNotFound(attribute_type.to_string()))?;

    if !attribute.set_first_argument(CustomAttributeArgument::String(value.to_string())) {
        return Err(InvalidArgument(format!(
            "{attribute_type} has no constructor arguments"
        )));
    }

    Ok(())
}
