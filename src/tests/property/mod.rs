//! Property-based tests
//!
//! Invariants that must hold for every input, checked with proptest.
//!
//! ## Test Modules
//!
//! - `normalizer_props`: alias keys
//!   - Normalizing twice equals normalizing once
//!   - Keys contain only alphanumeric characters
//!
//! - `geography_props`: catalog lookups
//!   - Every row resolves by code, Chinese name and English name
//!   - Lookups ignore ASCII case and surrounding whitespace
//!
//! - `token_filter_props`: index token cleanup
//!   - Every kept token is valid
//!   - No case-insensitive duplicates
//!   - Filtering is idempotent
//!
//! - `spellcheck_props`: fuzzy correction thresholds
//!   - One substitution in a short form is corrected
//!   - Two substitutions in a short form are not
//!
//! - `coordinate_props`: location validation
//!   - A point exists exactly when both values are in range
//!   - Accepted values are never altered
//!
//! By default proptest runs 256 cases per property; set `PROPTEST_CASES`
//! to change that.

mod coordinate_props;
mod geography_props;
mod normalizer_props;
mod spellcheck_props;
mod token_filter_props;
