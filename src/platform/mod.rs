//! Host platform detection and the naming rules for dispatched binaries.
//!
//! This module identifies the running host as a [`PlatformKey`] (OS family
//! plus normalized CPU architecture) and owns the low-level process plumbing
//! used by the dispatcher.

pub mod process;

// Internal modules
mod constants;
mod detection;

// Re-export detection types
pub use detection::{OsFamily, PlatformKey, normalize_arch};

// Re-export constants
pub use constants::{
    BIN_DIR_NAME, ISSUES_URL, LAUNCHER_NAME, PRODUCT_NAME, REINSTALL_COMMAND, RELEASES_URL,
    SUPPORTED_ARCHITECTURES, SUPPORTED_OS_FAMILIES, supported_platforms,
};
