//! Common Test Utilities
//!
//! Shared fixtures used across test modules:
//! - Provider payloads (plain and string-escaped)
//! - Spelling rule file contents

pub mod fixtures;

pub use fixtures::*;
