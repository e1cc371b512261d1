//! Applying single version-info edits to a PE file.
//!
//! [`ResourcePatcher`] is the seam between the field ordering logic of the
//! [`super::ResourceEditor`] and whatever actually rewrites the resource section. The
//! [`PatchTool`] implementation runs an external patch executable once per edit with the
//! following argument grammar:
//!
//! | Edit | Arguments |
//! |---|---|
//! | [`ResourceEdit::String`] | `<target> /s "<name>" "<value>"` |
//! | [`ResourceEdit::FileVersion`] | `<target> "<value>"` |
//! | [`ResourceEdit::ProductVersion`] | `<target> /pv "<value>"` |
//!
//! Arguments are passed as separate process arguments; quoting is left to the platform's
//! argument encoding.

use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use tempfile::TempPath;

use crate::{Error, Result};

/// Creation flag that keeps a console program from opening a window
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// How often a running tool is polled when a timeout is configured
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A single edit of the version-info resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceEdit<'a> {
    /// Sets the string value `name` of the string table
    String {
        /// The key in the string table, e.g. `CompanyName`
        name: &'a str,
        /// The new value
        value: &'a str,
    },
    /// Sets the file version
    FileVersion(&'a str),
    /// Sets the product version
    ProductVersion(&'a str),
}

impl ResourceEdit<'_> {
    /// The patch tool arguments for applying this edit to `target`
    #[must_use]
    pub fn arguments(&self, target: &Path) -> Vec<OsString> {
        let mut args = vec![target.as_os_str().to_owned()];
        match self {
            ResourceEdit::String { name, value } => {
                args.push("/s".into());
                args.push((*name).into());
                args.push((*value).into());
            }
            ResourceEdit::FileVersion(value) => args.push((*value).into()),
            ResourceEdit::ProductVersion(value) => {
                args.push("/pv".into());
                args.push((*value).into());
            }
        }
        args
    }
}

/// Something that can apply a [`ResourceEdit`] to a PE file in place
pub trait ResourcePatcher {
    /// Applies `edit` to the file at `target`.
    ///
    /// # Errors
    /// Returns an error if the edit could not be attempted at all
    fn patch(&self, target: &Path, edit: &ResourceEdit<'_>) -> Result<()>;
}

impl<T: ResourcePatcher + ?Sized> ResourcePatcher for &T {
    fn patch(&self, target: &Path, edit: &ResourceEdit<'_>) -> Result<()> {
        (**self).patch(target, edit)
    }
}

/// An external resource patch executable.
///
/// The tool is either an existing executable ([`PatchTool::new`]) or an embedded image that is
/// written to a temporary executable ([`PatchTool::materialize`]). A materialized tool is
/// deleted when the `PatchTool` is dropped.
///
/// Each edit runs the tool to completion. Standard streams are discarded and, on Windows, no
/// console window is created. The exit status is not interpreted; a non-zero status is only
/// logged.
///
/// # Examples
///
/// ```rust,no_run
/// use std::{path::Path, time::Duration};
/// use dotstamp::editor::{PatchTool, ResourceEdit, ResourcePatcher};
///
/// let tool = PatchTool::new("verpatch.exe").with_timeout(Some(Duration::from_secs(30)));
/// tool.patch(Path::new("app.exe"), &ResourceEdit::ProductVersion("1.2.3"))?;
/// # Ok::<(), dotstamp::Error>(())
/// ```
#[derive(Debug)]
pub struct PatchTool {
    program: PathBuf,
    timeout: Option<Duration>,
    materialized: Option<TempPath>,
}

impl PatchTool {
    /// Uses the executable at `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        PatchTool {
            program: program.into(),
            timeout: None,
            materialized: None,
        }
    }

    /// Writes the tool `image` to a fresh temporary executable.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for an empty image and
    /// [`crate::Error::FileError`] if the temporary file cannot be written
    pub fn materialize(image: &[u8]) -> Result<Self> {
        if image.is_empty() {
            return Err(Error::InvalidArgument("patch tool image is empty".to_string()));
        }

        let mut file = tempfile::Builder::new()
            .prefix("verpatch-")
            .suffix(".exe")
            .tempfile()?;
        file.write_all(image)?;
        file.flush()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o755))?;
        }

        // The handle has to be closed before the file can be executed
        let path = file.into_temp_path();
        log::debug!("materialized patch tool at {}", path.display());

        Ok(PatchTool {
            program: path.to_path_buf(),
            timeout: None,
            materialized: Some(path),
        })
    }

    /// Kills the tool and fails the edit if it runs longer than `timeout`; `None` waits
    /// indefinitely
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the executable that is run
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Whether the executable is a temporary copy owned by this value
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.materialized.is_some()
    }

    fn run(&self, args: &[OsString]) -> Result<ExitStatus> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        log::trace!("running {} {:?}", self.program.display(), args);
        let mut child = command.spawn().map_err(|source| Error::ToolSpawn {
            tool: self.program.clone(),
            source,
        })?;

        match self.timeout {
            Some(timeout) => self.wait_with_timeout(&mut child, timeout),
            None => Ok(child.wait()?),
        }
    }

    fn wait_with_timeout(&self, child: &mut Child, timeout: Duration) -> Result<ExitStatus> {
        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            let elapsed = started.elapsed();
            if elapsed >= timeout {
                log::warn!(
                    "{} did not finish within {:?}, killing it",
                    self.program.display(),
                    timeout
                );
                // The tool may have exited between the poll and the kill
                let _ = child.kill();
                child.wait()?;
                return Err(Error::ToolTimeout {
                    tool: self.program.clone(),
                    timeout,
                });
            }

            thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
        }
    }
}

impl ResourcePatcher for PatchTool {
    fn patch(&self, target: &Path, edit: &ResourceEdit<'_>) -> Result<()> {
        let status = self.run(&edit.arguments(target))?;
        if !status.success() {
            log::warn!(
                "{} exited with {} while applying {:?}",
                self.program.display(),
                status,
                edit
            );
        }
        Ok(())
    }
}
