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

//! Process delegation to the resolved binary.
//!
//! The dispatcher spawns the binary with inherited stdio, forwards the
//! arguments verbatim and waits for it. Exactly one outcome is produced per
//! call: a spawn failure (the child never started) or the child's exit code.

use crate::error::{
    LauncherError, Result, SignalExitPolicy, SpawnFailureKind, exit_code_from_status,
};
use crate::platform::process::{InterruptGuard, spawn_inherited, wait_for_exit};
use log::debug;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher {
    signal_policy: SignalExitPolicy,
}

impl Dispatcher {
    pub fn new(signal_policy: SignalExitPolicy) -> Self {
        Self { signal_policy }
    }

    /// Run `binary` with `args` and return the exit code the launcher should
    /// terminate with.
    pub fn dispatch(&self, binary: &Path, args: &[OsString]) -> Result<i32> {
        debug!(
            "Spawning {} with {} argument(s)",
            binary.display(),
            args.len()
        );

        // Must be in place before the child exists.
        let interrupts = InterruptGuard::install();

        let mut child = match spawn_inherited(binary, args) {
            Ok(child) => child,
            Err(e) => {
                let kind = SpawnFailureKind::from_io_error(&e);
                debug!("Spawn of {} failed ({kind}): {e}", binary.display());
                return Err(LauncherError::spawn(binary, e));
            }
        };
        let status = wait_for_exit(&mut child).map_err(LauncherError::ChildWait)?;

        if interrupts.was_interrupted() {
            debug!("Interrupt received while the child was running");
        }

        Ok(exit_code_from_status(status, self.signal_policy))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::format_error_with_color;
    use serial_test::serial;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_script(dir: &Path, body: &str, mode: u32) -> PathBuf {
        let path = dir.join("mcp-hub-linux-amd64");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_dispatch_propagates_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "exit 42", 0o755);

        let code = Dispatcher::default().dispatch(&script, &[]).unwrap();
        assert_eq!(code, 42);
    }

    #[test]
    #[serial]
    fn test_dispatch_forwards_arguments_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("argv.txt");
        let script = write_script(
            temp_dir.path(),
            &format!(
                "for a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done",
                out.display()
            ),
            0o755,
        );

        let args = vec![
            OsString::from("--foo"),
            OsString::from("bar"),
            OsString::from("with space"),
        ];
        let code = Dispatcher::default().dispatch(&script, &args).unwrap();
        assert_eq!(code, 0);

        let recorded = fs::read_to_string(&out).unwrap();
        assert_eq!(
            recorded.lines().collect::<Vec<_>>(),
            vec!["--foo", "bar", "with space"]
        );
    }

    #[test]
    #[serial]
    fn test_dispatch_without_execute_permission() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "exit 0", 0o644);

        let err = Dispatcher::default().dispatch(&script, &[]).unwrap_err();
        match &err {
            LauncherError::Spawn { kind, program, .. } => {
                assert_eq!(*kind, SpawnFailureKind::PermissionDenied);
                assert_eq!(program, &script);
            }
            other => panic!("unexpected error variant: {other:?}"),
        }

        let message = format_error_with_color(&err, false);
        assert!(message.contains("Permission denied"));
        assert!(message.contains("sudo"));
    }

    #[test]
    fn test_dispatch_missing_binary_is_spawn_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("mcp-hub-linux-amd64");

        let err = Dispatcher::default().dispatch(&missing, &[]).unwrap_err();
        assert!(matches!(
            err,
            LauncherError::Spawn {
                kind: SpawnFailureKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn test_dispatch_signal_termination_policies() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "kill -TERM $$", 0o755);

        let zero = Dispatcher::new(SignalExitPolicy::Zero)
            .dispatch(&script, &[])
            .unwrap();
        assert_eq!(zero, 0);

        let shell = Dispatcher::new(SignalExitPolicy::ShellConvention)
            .dispatch(&script, &[])
            .unwrap();
        assert_eq!(shell, 128 + 15);
    }
}
