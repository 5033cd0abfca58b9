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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::{
    FAILURE_EXIT_CODE, SIGNAL_EXIT_BASE, SignalExitPolicy, exit_code_from_status, get_exit_code,
};
pub use format::{format_error_with_color, should_use_color};

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why the operating system refused to create the child process.
///
/// Only used to tailor the diagnostic; every kind maps to the same exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnFailureKind {
    PermissionDenied,
    NotFound,
    Other,
}

impl SpawnFailureKind {
    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SpawnFailureKind::PermissionDenied,
            io::ErrorKind::NotFound => SpawnFailureKind::NotFound,
            _ => SpawnFailureKind::Other,
        }
    }
}

impl fmt::Display for SpawnFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnFailureKind::PermissionDenied => write!(f, "permission denied"),
            SpawnFailureKind::NotFound => write!(f, "not found"),
            SpawnFailureKind::Other => write!(f, "other"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Unsupported platform: {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Binary not found at {}", path.display())]
    BinaryNotFound { path: PathBuf },

    #[error("Failed to execute {}: {source}", crate::platform::LAUNCHER_NAME)]
    Spawn {
        program: PathBuf,
        kind: SpawnFailureKind,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for the child process: {0}")]
    ChildWait(#[source] io::Error),

    #[error("Unable to determine the launcher installation directory: {0}")]
    InstallLocation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LauncherError {
    /// Wraps a spawn-time I/O error, classifying it by its kind.
    pub fn spawn(program: impl Into<PathBuf>, source: io::Error) -> Self {
        LauncherError::Spawn {
            program: program.into(),
            kind: SpawnFailureKind::from_io_error(&source),
            source,
        }
    }
}

impl From<config::ConfigError> for LauncherError {
    fn from(err: config::ConfigError) -> Self {
        LauncherError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
