//! Version information in the PE resource section.
//!
//! The `VS_VERSIONINFO` resource is not reachable through managed metadata, so these fields
//! are written by a [`ResourcePatcher`], one edit per field, strictly in sequence against the
//! same file. The original filename is always written last: once it is renamed, the patch
//! tool resolves later edits against the new name.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tempfile::TempPath;

use crate::{
    editor::{
        config::ResourcePatchConfig,
        patcher::{PatchTool, ResourceEdit, ResourcePatcher},
    },
    Error, Result,
};

/// The version-resource fields, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ResourceField {
    /// `CompanyName` string
    CompanyName,
    /// `FileDescription` string
    FileDescription,
    /// The binary file version
    FileVersion,
    /// `InternalName` string
    InternalName,
    /// `LegalCopyright` string
    LegalCopyright,
    /// `LegalTrademarks` string
    LegalTrademarks,
    /// `ProductName` string
    ProductName,
    /// The binary product version
    ProductVersion,
    /// `Assembly Version` string
    AssemblyVersion,
    /// `OriginalFilename` string
    OriginalFilename,
}

impl ResourceField {
    /// The edit that sets this field to `value`
    #[must_use]
    pub fn edit(self, value: &str) -> ResourceEdit<'_> {
        let name = match self {
            ResourceField::FileVersion => return ResourceEdit::FileVersion(value),
            ResourceField::ProductVersion => return ResourceEdit::ProductVersion(value),
            ResourceField::CompanyName => "CompanyName",
            ResourceField::FileDescription => "FileDescription",
            ResourceField::InternalName => "InternalName",
            ResourceField::LegalCopyright => "LegalCopyright",
            ResourceField::LegalTrademarks => "LegalTrademarks",
            ResourceField::ProductName => "ProductName",
            ResourceField::AssemblyVersion => "Assembly Version",
            ResourceField::OriginalFilename => "OriginalFilename",
        };
        ResourceEdit::String { name, value }
    }
}

/// The version information stored in the PE resource section.
///
/// `None` leaves the corresponding entry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionResourceInformation {
    /// Company Name
    pub company_name: Option<String>,
    /// File Description
    pub file_description: Option<String>,
    /// File Version
    pub file_version: Option<String>,
    /// Internal Name
    pub internal_name: Option<String>,
    /// Legal Copyright
    pub legal_copyright: Option<String>,
    /// Legal Trademarks
    pub legal_trademarks: Option<String>,
    /// Original Filename
    pub original_filename: Option<String>,
    /// Product Name
    pub product_name: Option<String>,
    /// Product Version
    pub product_version: Option<String>,
    /// Assembly Version
    pub assembly_version: Option<String>,
}

impl VersionResourceInformation {
    /// The value of `field`, if set
    #[must_use]
    pub fn get(&self, field: ResourceField) -> Option<&str> {
        match field {
            ResourceField::CompanyName => self.company_name.as_deref(),
            ResourceField::FileDescription => self.file_description.as_deref(),
            ResourceField::FileVersion => self.file_version.as_deref(),
            ResourceField::InternalName => self.internal_name.as_deref(),
            ResourceField::LegalCopyright => self.legal_copyright.as_deref(),
            ResourceField::LegalTrademarks => self.legal_trademarks.as_deref(),
            ResourceField::ProductName => self.product_name.as_deref(),
            ResourceField::ProductVersion => self.product_version.as_deref(),
            ResourceField::AssemblyVersion => self.assembly_version.as_deref(),
            ResourceField::OriginalFilename => self.original_filename.as_deref(),
        }
    }

    /// All set fields with their values, in application order
    pub fn fields(&self) -> impl Iterator<Item = (ResourceField, &str)> {
        ResourceField::iter().filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// `true` if no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}

/// The binary whose resources are patched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTarget {
    /// A PE file on disk, patched in place
    File(PathBuf),
    /// An in-memory PE image, patched through a temporary copy
    Image(Vec<u8>),
}

/// Applies [`VersionResourceInformation`] records through a [`ResourcePatcher`].
///
/// # Examples
///
/// ```rust,no_run
/// use dotstamp::editor::{
///     PatchTool, ResourceEditor, ResourceTarget, VersionResourceInformation,
/// };
///
/// let info = VersionResourceInformation {
///     product_name: Some("Sample".to_string()),
///     original_filename: Some("Sample.dll".to_string()),
///     ..Default::default()
/// };
///
/// let editor = ResourceEditor::new(PatchTool::new("verpatch.exe")).atomic(true);
/// editor.apply(ResourceTarget::File("Sample.dll".into()), &info)?;
/// # Ok::<(), dotstamp::Error>(())
/// ```
#[derive(Debug)]
pub struct ResourceEditor<P> {
    patcher: P,
    atomic: bool,
}

impl<P: ResourcePatcher> ResourceEditor<P> {
    /// Creates an editor applying edits through `patcher`
    pub fn new(patcher: P) -> Self {
        ResourceEditor {
            patcher,
            atomic: false,
        }
    }

    /// Patch file targets through a scratch copy that replaces the original only on success
    #[must_use]
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// The patcher this editor applies edits with
    pub fn patcher(&self) -> &P {
        &self.patcher
    }

    /// Applies every set field of `info` to `target`.
    ///
    /// For [`ResourceTarget::Image`] the patched image is returned; file targets return
    /// `None`. Temporary copies are removed before this returns, on success and on failure.
    ///
    /// # Errors
    /// Returns the first error of the patcher or of temporary file handling. Unless the editor
    /// is atomic, edits applied to a file target before the failure remain in the file.
    pub fn apply(
        &self,
        target: ResourceTarget,
        info: &VersionResourceInformation,
    ) -> Result<Option<Vec<u8>>> {
        if info.is_empty() {
            return Ok(match target {
                ResourceTarget::Image(image) => Some(image),
                ResourceTarget::File(_) => None,
            });
        }

        match target {
            ResourceTarget::Image(image) => {
                let scratch = temp_image(&image)?;
                self.apply_all(&scratch, info)?;
                Ok(Some(fs::read(&scratch)?))
            }
            ResourceTarget::File(path) if self.atomic => {
                let scratch = scratch_copy(&path)?;
                self.apply_all(&scratch, info)?;
                scratch
                    .persist(&path)
                    .map_err(|error| Error::FileError(error.error))?;
                Ok(None)
            }
            ResourceTarget::File(path) => {
                self.apply_all(&path, info)?;
                Ok(None)
            }
        }
    }

    fn apply_all(&self, target: &Path, info: &VersionResourceInformation) -> Result<()> {
        for (field, value) in info.fields() {
            log::debug!("{}: setting {:?} to {:?}", target.display(), field, value);
            self.patcher.patch(target, &field.edit(value))?;
        }
        Ok(())
    }
}

/// Writes `image` to a temporary file; the handle is closed so other processes can open it
fn temp_image(image: &[u8]) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("dotstamp-")
        .suffix(".dll")
        .tempfile()?;
    file.write_all(image)?;
    file.flush()?;
    Ok(file.into_temp_path())
}

/// Copies `path` to a temporary file next to it, so it can later be renamed over the original
fn scratch_copy(path: &Path) -> Result<TempPath> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let scratch = tempfile::Builder::new()
        .prefix(".dotstamp-")
        .tempfile_in(directory)?
        .into_temp_path();
    fs::copy(path, &scratch)?;
    Ok(scratch)
}

/// Applies `info` to `target` with the patch tool carried as `tool_image`.
///
/// The tool is written to a temporary executable for the duration of the call and removed
/// afterwards, whether the call succeeds or not. Nothing is materialized if `info` has no
/// set field.
///
/// # Errors
/// Returns an error if the tool cannot be materialized or started, if it exceeds
/// `config.tool_timeout`, or on temporary file I/O failures
pub fn apply_resource_information(
    target: ResourceTarget,
    info: &VersionResourceInformation,
    tool_image: &[u8],
    config: &ResourcePatchConfig,
) -> Result<Option<Vec<u8>>> {
    if info.is_empty() {
        return ResourceEditor::new(NoPatcher).apply(target, info);
    }

    let tool = PatchTool::materialize(tool_image)?.with_timeout(config.tool_timeout);
    ResourceEditor::new(tool)
        .atomic(config.atomic)
        .apply(target, info)
}

/// Stand-in for a record without edits
struct NoPatcher;

impl ResourcePatcher for NoPatcher {
    fn patch(&self, _target: &Path, _edit: &ResourceEdit<'_>) -> Result<()> {
        Ok(())
    }
}
