//! Rule File Path Resolution
//!
//! Locates the spelling rule file at runtime, covering both a source checkout
//! (files under `data/`) and an installed layout (user data directory).

use std::path::{Path, PathBuf};

/// Spelling rule filename.
pub const RULES_FILENAME: &str = "spellcheck.rules";

const APP_DIR: &str = "hotel-enrich";

/// Resolves the path to the spelling rule file.
///
/// Checks locations in order:
/// 1. Resource directory (if provided)
/// 2. Development paths (`data/`, `resources/`, crate `data/`)
/// 3. User data directory
///
/// Returns `None` if no rule file exists.
pub fn get_rules_path(resource_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(res_dir) = resource_dir {
        for candidate in [res_dir.join("data").join(RULES_FILENAME), res_dir.join(RULES_FILENAME)] {
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    let mut dev_paths = vec![
        PathBuf::from("data").join(RULES_FILENAME),
        PathBuf::from("resources").join(RULES_FILENAME),
    ];
    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        dev_paths.push(PathBuf::from(dir).join("data").join(RULES_FILENAME));
    }
    if let Some(path) = dev_paths.into_iter().find(|p| p.exists()) {
        return Some(path);
    }

    get_user_data_dir()
        .map(|dir| dir.join(RULES_FILENAME))
        .filter(|p| p.exists())
}

/// `~/.local/share/hotel-enrich/` on Linux, the platform equivalent elsewhere.
pub fn get_user_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR))
}
