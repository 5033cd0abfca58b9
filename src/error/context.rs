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

use crate::error::{LauncherError, SpawnFailureKind};
use crate::platform::{
    ISSUES_URL, LAUNCHER_NAME, REINSTALL_COMMAND, RELEASES_URL, supported_platforms,
};
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a LauncherError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a LauncherError) -> Self {
        let (suggestion, details) = match error {
            LauncherError::UnsupportedPlatform { .. } => {
                let suggestion = Some(format!("For manual installation, visit:\n  {RELEASES_URL}"));
                let details = Some(format!(
                    "Supported platforms:\n{}",
                    supported_platforms()
                        .iter()
                        .map(|p| format!("  - {p}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                (suggestion, details)
            }
            LauncherError::BinaryNotFound { .. } => {
                let suggestion = Some(format!(
                    "Please try reinstalling with: {REINSTALL_COMMAND}\nIf the issue persists, \
                     please report it at:\n  {ISSUES_URL}"
                ));
                let details = Some(
                    "This may indicate a corrupted installation or unsupported platform."
                        .to_string(),
                );
                (suggestion, details)
            }
            LauncherError::Spawn { kind, .. } => match kind {
                SpawnFailureKind::PermissionDenied => {
                    let suggestion = if cfg!(windows) {
                        Some("Run the terminal as Administrator and try again.".to_string())
                    } else {
                        Some(format!(
                            "Try running with elevated permissions:\n  sudo npx {LAUNCHER_NAME}"
                        ))
                    };
                    let details = Some(
                        "Permission denied. Try running with appropriate permissions.".to_string(),
                    );
                    (suggestion, details)
                }
                SpawnFailureKind::NotFound => {
                    let suggestion = Some(format!("Try reinstalling: {REINSTALL_COMMAND}"));
                    let details = Some(
                        "Binary not found. Please ensure the package is correctly installed."
                            .to_string(),
                    );
                    (suggestion, details)
                }
                SpawnFailureKind::Other => {
                    let suggestion =
                        Some(format!("For troubleshooting, visit:\n  {ISSUES_URL}"));
                    (suggestion, None)
                }
            },
            LauncherError::ChildWait(_) => {
                let suggestion = Some(format!("For troubleshooting, visit:\n  {ISSUES_URL}"));
                (suggestion, None)
            }
            LauncherError::InstallLocation(_) => {
                let suggestion = Some(format!(
                    "Set MCP_HUB_TUI_BIN_DIR to the directory containing the {LAUNCHER_NAME} \
                     binaries, or reinstall with: {REINSTALL_COMMAND}"
                ));
                (suggestion, None)
            }
            LauncherError::ConfigError(_) => {
                let suggestion = Some(
                    "Check the MCP_HUB_TUI_* environment variables and unset any with invalid \
                     values."
                        .to_string(),
                );
                (suggestion, None)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
