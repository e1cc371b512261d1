use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Caller Errors
/// - [`Error::InvalidArgument`] - An operation was invoked with a value it cannot accept
/// - [`Error::AttributeNotFound`] - A direct attribute update found no matching entry
///
/// ## Name Formatting Errors
/// - [`Error::RecursionLimit`] - Generic nesting exceeded the formatter's depth guard
///
/// ## External Tool Errors
/// - [`Error::ToolSpawn`] - The resource patch tool could not be started
/// - [`Error::ToolTimeout`] - The resource patch tool exceeded its time budget
///
/// ## I/O Errors
/// - [`Error::FileError`] - Filesystem I/O errors (temporary files, reading patched images)
///
/// # Examples
///
/// ```rust
/// use dotstamp::{metadata::Assembly, editor::update_constructor_argument, Error};
///
/// let mut assembly = Assembly::new("Sample");
/// match update_constructor_argument(&mut assembly, "System.Reflection.AssemblyTitleAttribute", "Sample") {
///     Ok(()) => println!("updated"),
///     Err(Error::AttributeNotFound(name)) => println!("{name} is not present"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An operation received an argument it cannot work with.
    ///
    /// This is a caller contract violation and is never retried, e.g. an empty attribute
    /// name, an attribute entry without constructor arguments on a direct update, or an
    /// empty tool image.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// No custom attribute with the requested full name exists on the assembly.
    #[error("Custom attribute not found - {0}")]
    AttributeNotFound(String),

    /// Recursion limit reached.
    ///
    /// Generic argument trees are expected to be shallow; a tree nested deeper than the
    /// formatter's limit is treated as malformed metadata. The associated value is the
    /// limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// The external resource patch tool could not be started.
    #[error("Failed to start resource patch tool {} - {source}", .tool.display())]
    ToolSpawn {
        /// Path of the executable that failed to start
        tool: PathBuf,
        /// The underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The external resource patch tool did not exit within the configured timeout and was
    /// killed.
    #[error("Resource patch tool {} did not finish within {timeout:?}", .tool.display())]
    ToolTimeout {
        /// Path of the executable that was killed
        tool: PathBuf,
        /// The timeout that was exceeded
        timeout: Duration,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors from temporary file handling and from reading back
    /// patched images.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
