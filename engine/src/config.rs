//! Engine configuration.
//!
//! A host composes the engine from adapters and this small set of tunables.
//! The struct deserializes from the host's configuration source; every field
//! has a default so partial documents are accepted.

use serde::{Deserialize, Serialize};

/// Default number of roster entries shown per page.
pub const DEFAULT_ROSTER_PAGE_SIZE: usize = 10;

/// Tunables bound by the host when composing the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Page size used by the roster view. Must be non-zero to construct a
    /// view; the default is [`DEFAULT_ROSTER_PAGE_SIZE`].
    pub roster_page_size: usize,
    /// Whether the candidate pool may fall back to the unfiltered role
    /// listing when the directory is unreachable.
    pub directory_fallback_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roster_page_size: DEFAULT_ROSTER_PAGE_SIZE,
            directory_fallback_enabled: true,
        }
    }
}
