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

//! Platform-specific process execution.

use log::{debug, warn};
use signal_hook::SigId;
use signal_hook::consts::signal::SIGINT;
use signal_hook::flag;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Spawn `program` with all three standard streams inherited from the launcher.
///
/// The child stays in the launcher's process group and session, so terminal
/// signals reach both processes.
pub fn spawn_inherited(program: &Path, args: &[OsString]) -> io::Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
}

/// Block until the child exits.
pub fn wait_for_exit(child: &mut Child) -> io::Result<ExitStatus> {
    let status = child.wait()?;
    debug!("Child process {} exited with {status}", child.id());
    Ok(status)
}

/// Keeps the launcher alive across terminal interrupts while a child runs.
///
/// The interrupt is still delivered to the child through the shared process
/// group; the launcher only records it. Handlers are removed on drop.
#[derive(Debug)]
pub struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
    handles: Vec<SigId>,
}

impl InterruptGuard {
    pub fn install() -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let mut handles = Vec::new();

        for signal in interrupt_signals() {
            match flag::register(*signal, interrupted.clone()) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    warn!("Failed to register interrupt handler for signal {signal}: {err}")
                }
            }
        }

        Self {
            interrupted,
            handles,
        }
    }

    /// Whether SIGINT arrived while installed. Only surfaced in debug logs.
    pub fn was_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            signal_hook::low_level::unregister(handle);
        }
    }
}

fn interrupt_signals() -> &'static [i32] {
    &[SIGINT]
}
