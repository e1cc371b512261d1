use std::{
    cell::{Cell, RefCell},
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use strum::IntoEnumIterator;

use crate::{
    editor::{AssemblyInfoField, ResourceEdit, ResourcePatcher},
    metadata::{
        customattributes::CustomAttribute,
        method::{Method, MethodRc},
        signatures::TypeSignature,
        Assembly,
    },
    Error, Result,
};

// Helper function to create a class reference
pub fn named(namespace: &str, name: &str) -> TypeSignature {
    TypeSignature::class(namespace, name)
}

// Helper function to create an instantiated generic class
pub fn generic(namespace: &str, name: &str, args: Vec<TypeSignature>) -> TypeSignature {
    TypeSignature::generic_inst(named(namespace, name), args)
}

// Helper function to create a parameterless method returning void
pub fn method_rc(name: &str) -> MethodRc {
    Arc::new(Method::new(name))
}

// Helper function to create an attribute with a single string constructor argument
pub fn string_attribute(attribute_type: &str, value: &str) -> CustomAttribute {
    CustomAttribute::with_string_argument(attribute_type, value)
}

/// An assembly carrying every assembly-information attribute with a placeholder value
pub fn all_info_attributes() -> Assembly {
    let mut assembly = Assembly::new("Sample");
    for field in AssemblyInfoField::iter() {
        assembly.add_custom_attribute(string_attribute(field.attribute_type(), "placeholder"));
    }
    assembly
}

/// The first string argument of the first attribute of type `attribute_type`
pub fn first_string<'a>(assembly: &'a Assembly, attribute_type: &str) -> Option<&'a str> {
    assembly
        .find_custom_attribute(attribute_type)
        .and_then(CustomAttribute::first_argument)
        .and_then(|argument| argument.as_str())
}

/// A [`ResourcePatcher`] that records every call instead of running a tool.
///
/// It can optionally append bytes to the target, to observe which file an edit landed in,
/// and fail at a given call index. A failing call is still recorded but leaves the target
/// unchanged.
#[derive(Debug, Default)]
pub struct RecordingPatcher {
    calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    append: Option<Vec<u8>>,
    fail_at: Option<usize>,
    count: Cell<usize>,
}

impl RecordingPatcher {
    pub fn appending(bytes: &[u8]) -> Self {
        RecordingPatcher {
            append: Some(bytes.to_vec()),
            ..Default::default()
        }
    }

    pub fn failing_at(index: usize) -> Self {
        RecordingPatcher::default().fail_at(index)
    }

    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Arguments of every call, as the patch tool would have received them
    pub fn arguments(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|(_, args)| args.clone()).collect()
    }

    pub fn targets(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .map(|(target, _)| target.clone())
            .collect()
    }
}

impl ResourcePatcher for RecordingPatcher {
    fn patch(&self, target: &Path, edit: &ResourceEdit<'_>) -> Result<()> {
        let args = edit
            .arguments(target)
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.calls.borrow_mut().push((target.to_path_buf(), args));

        let index = self.count.get();
        self.count.set(index + 1);
        if self.fail_at == Some(index) {
            return Err(Error::Error(format!("scripted failure at call {index}")));
        }

        if let Some(bytes) = &self.append {
            OpenOptions::new().append(true).open(target)?.write_all(bytes)?;
        }
        Ok(())
    }
}
