//! Utility modules.

/// Registered-domain matching and record-name helpers.
pub mod domain;
