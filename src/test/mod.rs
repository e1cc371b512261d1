//! Shared fixtures for unit tests
//!
//! [`builders`] creates metadata entities and a scripted [`crate::editor::ResourcePatcher`]
//! without going through a loader or an external tool.

pub mod builders;
