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

use crate::error::LauncherError;
use std::process::ExitStatus;

/// Exit code for every failure detected by the launcher itself.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Shell convention base for signal-terminated processes.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// How to report a child that terminated without an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalExitPolicy {
    /// Report success (`0`).
    #[default]
    Zero,
    /// Report `128 + signal` on Unix, `0` elsewhere.
    ShellConvention,
}

pub fn get_exit_code(error: &LauncherError) -> i32 {
    match error {
        LauncherError::UnsupportedPlatform { .. }
        | LauncherError::BinaryNotFound { .. }
        | LauncherError::Spawn { .. }
        | LauncherError::ChildWait(_)
        | LauncherError::InstallLocation(_)
        | LauncherError::ConfigError(_) => FAILURE_EXIT_CODE,
    }
}

/// Translate the child's exit status into the launcher's own exit code.
pub fn exit_code_from_status(status: ExitStatus, policy: SignalExitPolicy) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    match policy {
        SignalExitPolicy::Zero => 0,
        SignalExitPolicy::ShellConvention => terminating_signal(status)
            .map(|signal| SIGNAL_EXIT_BASE + signal)
            .unwrap_or(0),
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}
