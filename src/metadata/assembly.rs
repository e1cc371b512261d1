use crate::metadata::customattributes::CustomAttribute;

/// Represents a .NET CIL binary (assembly) together with its assembly-level custom attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    /// The simple name of the assembly
    pub name: String,
    /// a 2-byte value specifying the Major version number
    pub major_version: u32,
    /// a 2-byte value specifying the Minor version number
    pub minor_version: u32,
    /// a 2-byte value specifying the Build number
    pub build_number: u32,
    /// a 2-byte value specifying the Revision number
    pub revision_number: u32,
    /// The culture, `None` for the neutral culture
    pub culture: Option<String>,
    /// Custom attributes attached to this assembly, in metadata order
    pub custom_attributes: Vec<CustomAttribute>,
}

impl Assembly {
    /// Creates an assembly named `name` with version 0.0.0.0 and no custom attributes
    pub fn new(name: impl Into<String>) -> Self {
        Assembly {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The version as `major.minor.build.revision`
    #[must_use]
    pub fn version(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major_version, self.minor_version, self.build_number, self.revision_number
        )
    }

    /// Index of the first custom attribute whose full type name is `fullname`
    #[must_use]
    pub fn position_custom_attribute(&self, fullname: &str) -> Option<usize> {
        self.custom_attributes
            .iter()
            .position(|attribute| attribute.attribute_type == fullname)
    }

    /// The first custom attribute whose full type name is `fullname`
    #[must_use]
    pub fn find_custom_attribute(&self, fullname: &str) -> Option<&CustomAttribute> {
        self.custom_attributes
            .iter()
            .find(|attribute| attribute.attribute_type == fullname)
    }

    /// Mutable access to the first custom attribute whose full type name is `fullname`
    pub fn find_custom_attribute_mut(&mut self, fullname: &str) -> Option<&mut CustomAttribute> {
        self.custom_attributes
            .iter_mut()
            .find(|attribute| attribute.attribute_type == fullname)
    }

    /// Appends a custom attribute to the collection
    pub fn add_custom_attribute(&mut self, attribute: CustomAttribute) {
        self.custom_attributes.push(attribute);
    }

    /// Replaces the custom attribute at `index`, returning the previous entry.
    ///
    /// Returns `None` and leaves the collection untouched if `index` is out of range.
    pub fn replace_custom_attribute(
        &mut self,
        index: usize,
        attribute: CustomAttribute,
    ) -> Option<CustomAttribute> {
        self.custom_attributes
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, attribute))
    }

    /// Removes and returns the custom attribute at `index`, if present
    pub fn remove_custom_attribute(&mut self, index: usize) -> Option<CustomAttribute> {
        (index < self.custom_attributes.len()).then(|| self.custom_attributes.remove(index))
    }
}
