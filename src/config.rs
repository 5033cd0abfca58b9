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

//! Launcher settings.
//!
//! The launcher defines no command-line flags, so every setting comes from
//! `MCP_HUB_TUI_*` environment variables. All settings are optional.

use crate::error::{Result, SignalExitPolicy};
use crate::resolver::{BinaryResolver, ExecutableSibling, FixedDir};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "MCP_HUB_TUI";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Overrides `<launcher dir>/bin`.
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,

    /// 0=warn, 1=info, 2=debug, 3+=trace
    #[serde(default)]
    pub verbose: u8,

    #[serde(default)]
    pub no_color: bool,

    /// Report signal-terminated children as `128 + signal` instead of `0`.
    #[serde(default)]
    pub signal_exit_codes: bool,
}

impl LauncherConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(environment())
    }

    fn from_source(source: config::Environment) -> Result<Self> {
        let config = config::Config::builder().add_source(source).build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn signal_policy(&self) -> SignalExitPolicy {
        if self.signal_exit_codes {
            SignalExitPolicy::ShellConvention
        } else {
            SignalExitPolicy::Zero
        }
    }

    pub fn resolver(&self) -> BinaryResolver {
        match &self.bin_dir {
            Some(dir) => BinaryResolver::new(FixedDir::new(dir)),
            None => BinaryResolver::new(ExecutableSibling),
        }
    }
}

/// `MCP_HUB_TUI_BIN_DIR` style variables; `__` separates nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
