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

use crate::error::{ErrorContext, LauncherError};
use std::env;
use std::io::IsTerminal;

/// Format error for display to user with colors and formatting
///
/// Suggestion lines that start with whitespace are continuations of the
/// previous bullet (commands, URLs) and are printed without a bullet.
pub fn format_error_with_color(error: &LauncherError, use_color: bool) -> String {
    let red = if use_color { "\x1b[31m" } else { "" };
    let yellow = if use_color { "\x1b[33m" } else { "" };
    let cyan = if use_color { "\x1b[36m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };
    let bold = if use_color { "\x1b[1m" } else { "" };

    let context = ErrorContext::new(error);
    let mut output = String::new();

    // Error header
    output.push_str(&format!("{red}{bold}Error:{reset} {error}\n"));

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{yellow}{bold}Suggestions:{reset}\n"));
        for line in suggestion.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(char::is_whitespace) {
                output.push_str(&format!("  {cyan}{}{reset}\n", line.trim_start()));
            } else {
                output.push_str(&format!("{cyan}• {line}{reset}\n"));
            }
        }
    }

    // Always end with a reset to ensure no color bleeding
    if use_color && !output.is_empty() {
        output.push_str(reset);
    }

    output
}

/// Decide whether diagnostics on stderr should carry ANSI colors.
pub fn should_use_color(disabled_by_config: bool) -> bool {
    if disabled_by_config {
        return false;
    }

    // https://no-color.org/
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    std::io::stderr().is_terminal()
}
