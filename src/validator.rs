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

//! Pre-flight check that the resolved binary is present.
//!
//! A missing file is reported here, with install-specific guidance, rather
//! than surfacing as an opaque spawn-time "not found" error.

use crate::error::{LauncherError, Result};
use log::debug;
use std::path::Path;

pub fn validate(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LauncherError::BinaryNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Binary present at {}", path.display());
    Ok(())
}
