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

//! Launch sequence for the dispatched binary.
//!
//! `Resolving -> Validating -> Spawning -> Running -> Exited(code)`, with any
//! failure ending the sequence immediately. Nothing here terminates the
//! process; the caller receives either the exit code to use or the error to
//! report.

use crate::config::LauncherConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::platform::PlatformKey;
use crate::resolver::BinaryResolver;
use crate::validator;
use log::debug;
use std::ffi::OsString;
use std::time::Instant;

pub struct Launcher {
    resolver: BinaryResolver,
    dispatcher: Dispatcher,
}

impl Launcher {
    pub fn new(resolver: BinaryResolver, dispatcher: Dispatcher) -> Self {
        Self {
            resolver,
            dispatcher,
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        debug!("Launcher configuration: {config:?}");
        Self::new(config.resolver(), Dispatcher::new(config.signal_policy()))
    }

    /// Launch the binary for the running host with `args`.
    pub fn run(&self, args: &[OsString]) -> Result<i32> {
        self.run_for(&PlatformKey::current(), args)
    }

    pub fn run_for(&self, platform: &PlatformKey, args: &[OsString]) -> Result<i32> {
        let start = Instant::now();
        debug!("Launching for platform {platform}");

        let binary = self.resolver.resolve(platform)?;
        validator::validate(binary.path())?;

        debug!("Launch preparation completed in {:?}", start.elapsed());
        self.dispatcher.dispatch(binary.path(), args)
    }
}
