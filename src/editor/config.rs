//! Configuration for resource patching
//!
//! The defaults reproduce the plain behaviour of running the patch tool: edits go straight
//! into the target file and the tool is waited for indefinitely. The hardening options trade
//! that for all-or-nothing file updates and a bounded tool runtime.

use std::time::Duration;

/// Configuration for applying version-resource information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourcePatchConfig {
    /// Patch a scratch copy of a target file and replace the original only after every edit
    /// was applied. Without it, a failure part-way leaves the earlier edits in the file.
    pub atomic: bool,

    /// Kill the patch tool and fail the edit after this long; `None` waits indefinitely
    pub tool_timeout: Option<Duration>,
}

impl ResourcePatchConfig {
    /// Atomic file updates and a five minute limit per tool run
    #[must_use]
    pub fn hardened() -> Self {
        Self {
            atomic: true,
            tool_timeout: Some(Duration::from_secs(300)),
        }
    }
}
