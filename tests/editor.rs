//! Integration tests for assembly information editing.
//!
//! Exercises both editors through the public API: attribute updates on an assembly as a
//! build step would stamp it, and resource edits through a patcher that rewrites a plain
//! text "resource file" instead of a PE image.

use dotstamp::prelude::*;
use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

/// An assembly as compiled from a default project template
fn template_assembly() -> Assembly {
    let mut assembly = Assembly::new("Contoso.Core");
    assembly.major_version = 1;
    for (attribute_type, value) in [
        ("System.Reflection.AssemblyTitleAttribute", "Contoso.Core"),
        ("System.Reflection.AssemblyDescriptionAttribute", ""),
        ("System.Reflection.AssemblyCompanyAttribute", ""),
        ("System.Reflection.AssemblyProductAttribute", "Contoso.Core"),
        ("System.Reflection.AssemblyCopyrightAttribute", "Copyright 2024"),
        ("System.Runtime.Versioning.TargetFrameworkAttribute", ".NETCoreApp,Version=v8.0"),
        ("System.Reflection.AssemblyVersionAttribute", "1.0.0.0"),
    ] {
        assembly.add_custom_attribute(CustomAttribute::with_string_argument(
            attribute_type,
            value,
        ));
    }
    assembly
}

fn first_string<'a>(assembly: &'a Assembly, attribute_type: &str) -> Option<&'a str> {
    assembly
        .find_custom_attribute(attribute_type)
        .and_then(|attribute| attribute.first_argument())
        .and_then(|argument| argument.as_str())
}

#[test]
fn test_stamp_release_information() -> Result<()> {
    let mut assembly = template_assembly();
    let info = AssemblyInformation {
        company: Some("Contoso Ltd".to_string()),
        copyright: Some("Copyright 2025 Contoso Ltd".to_string()),
        file_version: Some("2.1.0.42".to_string()),
        version: Some("2.1.0.0".to_string()),
        ..Default::default()
    };

    // The template has no file version attribute, so only three fields can be updated
    let applied = AssemblyInfoEditor::default().apply(&mut assembly, &info)?;
    assert_eq!(
        applied,
        vec![
            AssemblyInfoField::Company,
            AssemblyInfoField::Copyright,
            AssemblyInfoField::Version,
        ]
    );
    assert_eq!(
        first_string(&assembly, "System.Reflection.AssemblyCompanyAttribute"),
        Some("Contoso Ltd")
    );
    assert!(assembly
        .find_custom_attribute("System.Reflection.AssemblyFileVersionAttribute")
        .is_none());

    // Creating fills the gap and leaves everything else as it was
    let before = assembly.clone();
    let applied = AssemblyInfoEditor::new(AttributePolicy::CreateIfMissing)
        .apply(&mut assembly, &info)?;
    assert_eq!(applied.len(), 4);
    assert_eq!(
        assembly.custom_attributes.len(),
        before.custom_attributes.len() + 1
    );
    assert_eq!(
        first_string(&assembly, "System.Reflection.AssemblyFileVersionAttribute"),
        Some("2.1.0.42")
    );
    assert_eq!(
        first_string(&assembly, "System.Runtime.Versioning.TargetFrameworkAttribute"),
        Some(".NETCoreApp,Version=v8.0")
    );
    assert_eq!(assembly.version(), before.version());
    Ok(())
}

#[test]
fn test_update_any_attribute_by_name() -> Result<()> {
    let mut assembly = template_assembly();

    update_constructor_argument(
        &mut assembly,
        "System.Runtime.Versioning.TargetFrameworkAttribute",
        ".NETCoreApp,Version=v9.0",
    )?;
    assert_eq!(
        first_string(&assembly, "System.Runtime.Versioning.TargetFrameworkAttribute"),
        Some(".NETCoreApp,Version=v9.0")
    );

    let missing = update_constructor_argument(
        &mut assembly,
        "System.Reflection.AssemblyTrademarkAttribute",
        "Contoso(tm)",
    );
    assert!(matches!(missing, Err(Error::AttributeNotFound(_))));
    Ok(())
}

/// Applies string edits to a `key=value` text file, one line per key
#[derive(Default)]
struct TextPatcher {
    edited: RefCell<Vec<PathBuf>>,
}

impl ResourcePatcher for TextPatcher {
    fn patch(&self, target: &Path, edit: &ResourceEdit<'_>) -> Result<()> {
        let (key, value) = match edit {
            ResourceEdit::String { name, value } => (*name, *value),
            ResourceEdit::FileVersion(value) => ("FILEVERSION", *value),
            ResourceEdit::ProductVersion(value) => ("PRODUCTVERSION", *value),
        };

        let mut lines: Vec<String> = fs::read_to_string(target)?
            .lines()
            .filter(|line| !line.starts_with(&format!("{key}=")))
            .map(str::to_string)
            .collect();
        lines.push(format!("{key}={value}"));
        fs::write(target, lines.join("\n"))?;

        self.edited.borrow_mut().push(target.to_path_buf());
        Ok(())
    }
}

#[test]
fn test_resource_image_round_trip() -> Result<()> {
    let info = VersionResourceInformation {
        company_name: Some("Contoso Ltd".to_string()),
        file_version: Some("2.1.0.42".to_string()),
        product_version: Some("2.1".to_string()),
        original_filename: Some("Contoso.Core.dll".to_string()),
        ..Default::default()
    };

    let patcher = TextPatcher::default();
    let patched = ResourceEditor::new(&patcher)
        .apply(ResourceTarget::Image(b"CompanyName=old".to_vec()), &info)?
        .expect("image targets return the patched bytes");

    assert_eq!(
        String::from_utf8(patched).unwrap(),
        "CompanyName=Contoso Ltd\nFILEVERSION=2.1.0.42\nPRODUCTVERSION=2.1\n\
         OriginalFilename=Contoso.Core.dll"
    );

    // Every edit went to the same scratch copy, which is gone now
    let edited = patcher.edited.borrow();
    assert_eq!(edited.len(), 4);
    assert!(edited.iter().all(|path| path == &edited[0]));
    assert!(!edited[0].exists());
    Ok(())
}

#[test]
fn test_resource_file_in_place() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Contoso.Core.dll");
    fs::write(&path, "ProductName=Template")?;

    let info = VersionResourceInformation {
        product_name: Some("Contoso".to_string()),
        ..Default::default()
    };

    let patcher = TextPatcher::default();
    for atomic in [false, true] {
        let result = ResourceEditor::new(&patcher)
            .atomic(atomic)
            .apply(ResourceTarget::File(path.clone()), &info)?;
        assert!(result.is_none());
        assert_eq!(fs::read_to_string(&path)?, "ProductName=Contoso");
    }

    // Only the in-place run touched the target itself
    let edited = patcher.edited.borrow();
    assert_eq!(edited[0], path);
    assert_ne!(edited[1], path);
    assert_eq!(fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}
