// Copyright 2025 gabadi
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host identity detection.
//!
//! The host is described by a [`PlatformKey`]: the coarse OS family that
//! selects the naming convention, and a normalized CPU architecture token.
//! Architectures missing from the alias table pass through unchanged so that
//! a binary published for an unlisted architecture can still be found.

use super::constants::PRODUCT_NAME;
use std::env::consts;
use std::fmt;

/// Translation of host-reported architecture names into the tokens used in
/// binary file names.
const ARCH_ALIASES: &[(&str, &str)] = &[
    ("x86_64", "amd64"),
    ("x64", "amd64"),
    ("amd64", "amd64"),
    ("aarch64", "arm64"),
    ("arm64", "arm64"),
];

/// Coarse operating-system category used to pick the binary naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
    /// Any other host OS, carrying the name it reported.
    Other(String),
}

impl OsFamily {
    /// Map a host-reported OS name (as in `std::env::consts::OS`).
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" | "darwin" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            "windows" | "win32" => OsFamily::Windows,
            other => OsFamily::Other(other.to_string()),
        }
    }

    pub fn current() -> Self {
        Self::from_os_name(consts::OS)
    }

    /// Token used inside binary file names; `None` for unsupported families.
    pub fn file_token(&self) -> Option<&'static str> {
        match self {
            OsFamily::MacOs => Some("darwin"),
            OsFamily::Linux => Some("linux"),
            OsFamily::Windows => Some("windows"),
            OsFamily::Other(_) => None,
        }
    }

    pub fn executable_extension(&self) -> &'static str {
        match self {
            OsFamily::Windows => ".exe",
            _ => "",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
            OsFamily::Windows => "Windows",
            OsFamily::Other(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.file_token().is_some()
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_token() {
            Some(token) => write!(f, "{token}"),
            None => write!(f, "{}", self.display_name()),
        }
    }
}

/// Normalize a host-reported architecture string.
///
/// Known aliases map to `amd64` / `arm64`; anything else is returned as is.
pub fn normalize_arch(raw: &str) -> String {
    ARCH_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Identity of the running host: `(osFamily, cpuArch)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey {
    pub os: OsFamily,
    /// Normalized architecture token.
    pub arch: String,
}

impl PlatformKey {
    /// Build a key from an OS family and a raw, not yet normalized, architecture.
    pub fn new(os: OsFamily, raw_arch: &str) -> Self {
        Self {
            os,
            arch: normalize_arch(raw_arch),
        }
    }

    /// Detect the host the launcher is running on.
    ///
    /// # Example
    ///
    /// ```
    /// use mcp_hub_tui::platform::PlatformKey;
    ///
    /// let key = PlatformKey::current();
    /// println!("Running on {}-{}", key.os, key.arch);
    /// ```
    pub fn current() -> Self {
        Self::new(OsFamily::current(), consts::ARCH)
    }

    /// File name of the binary published for this platform:
    /// `mcp-hub-<os>-<arch>[.exe]`. Returns `None` for unsupported OS families.
    pub fn binary_file_name(&self) -> Option<String> {
        let os_token = self.os.file_token()?;
        Some(format!(
            "{PRODUCT_NAME}-{os_token}-{}{}",
            self.arch,
            self.os.executable_extension()
        ))
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
