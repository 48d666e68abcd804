//! Crate-level test suites
//!
//! - `common`: shared payload and rule fixtures
//! - `mocks`: mockall doubles for external capabilities
//! - `property`: proptest invariants
//! - `unit`: scenario tests across module boundaries

mod common;
mod mocks;
mod property;
