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

//! Platform-specific constants and naming tables.

use super::OsFamily;

/// Prefix shared by every dispatched binary file name.
pub const PRODUCT_NAME: &str = "mcp-hub";

/// Name the launcher is installed and invoked as.
pub const LAUNCHER_NAME: &str = "mcp-hub-tui";

/// Directory next to the launcher that holds the per-platform binaries.
pub const BIN_DIR_NAME: &str = "bin";

pub const RELEASES_URL: &str = "https://github.com/gabadi/cc-mcp-manager/releases";
pub const ISSUES_URL: &str = "https://github.com/gabadi/cc-mcp-manager/issues";
pub const REINSTALL_COMMAND: &str = "npm uninstall -g mcp-hub-tui && npx mcp-hub-tui";

/// OS families a binary is published for.
pub const SUPPORTED_OS_FAMILIES: [OsFamily; 3] =
    [OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows];

/// Canonical architecture tokens a binary is published for.
pub const SUPPORTED_ARCHITECTURES: [&str; 2] = ["amd64", "arm64"];

/// Human readable list of published platform/architecture combinations,
/// e.g. `Linux (amd64, arm64)`.
pub fn supported_platforms() -> Vec<String> {
    let arches = SUPPORTED_ARCHITECTURES.join(", ");
    SUPPORTED_OS_FAMILIES
        .iter()
        .map(|os| format!("{} ({arches})", os.display_name()))
        .collect()
}
