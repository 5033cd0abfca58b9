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

//! Resolution of the platform-specific binary path.
//!
//! The file name is derived purely from the host [`PlatformKey`]; the
//! directory comes from an [`InstallLocation`]. An unsupported OS family is
//! rejected before the install location is consulted, so no filesystem access
//! happens on that path.

use crate::error::{LauncherError, Result};
use crate::platform::{BIN_DIR_NAME, PlatformKey};
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the directory that holds the per-platform binaries.
pub trait InstallLocation {
    fn bin_dir(&self) -> Result<PathBuf>;
}

/// `bin/` next to the running launcher executable, symlinks resolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecutableSibling;

impl InstallLocation for ExecutableSibling {
    fn bin_dir(&self) -> Result<PathBuf> {
        let exe = env::current_exe().map_err(|e| {
            LauncherError::InstallLocation(format!("cannot locate the running executable: {e}"))
        })?;
        bin_dir_beside(exe)
    }
}

fn bin_dir_beside(exe: PathBuf) -> Result<PathBuf> {
    // Package managers usually expose the launcher through a symlink.
    let exe = match fs::canonicalize(&exe) {
        Ok(canonical) => canonical,
        Err(e) => {
            debug!("Cannot canonicalize {}, using it as is: {e}", exe.display());
            exe
        }
    };
    let install_dir = exe.parent().ok_or_else(|| {
        LauncherError::InstallLocation(format!(
            "executable path has no parent directory: {}",
            exe.display()
        ))
    })?;

    Ok(install_dir.join(BIN_DIR_NAME))
}

/// An explicitly configured binaries directory.
#[derive(Debug, Clone)]
pub struct FixedDir(PathBuf);

impl FixedDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl InstallLocation for FixedDir {
    fn bin_dir(&self) -> Result<PathBuf> {
        std::path::absolute(&self.0).map_err(|e| {
            LauncherError::InstallLocation(format!(
                "cannot make {} absolute: {e}",
                self.0.display()
            ))
        })
    }
}

/// The binary selected for this host. Computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinary {
    path: PathBuf,
    file_name: String,
}

impl ResolvedBinary {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

pub struct BinaryResolver {
    location: Box<dyn InstallLocation>,
}

impl BinaryResolver {
    pub fn new(location: impl InstallLocation + 'static) -> Self {
        Self {
            location: Box::new(location),
        }
    }

    pub fn resolve(&self, platform: &PlatformKey) -> Result<ResolvedBinary> {
        let file_name =
            platform
                .binary_file_name()
                .ok_or_else(|| LauncherError::UnsupportedPlatform {
                    os: platform.os.to_string(),
                    arch: platform.arch.clone(),
                })?;

        let bin_dir = self.location.bin_dir()?;
        let path = bin_dir.join(&file_name);
        debug!("Resolved {platform} to {}", path.display());

        Ok(ResolvedBinary { path, file_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Records whether the resolver asked for the binaries directory.
    struct RecordingLocation {
        dir: PathBuf,
        consulted: Rc<Cell<bool>>,
    }

    impl InstallLocation for RecordingLocation {
        fn bin_dir(&self) -> Result<PathBuf> {
            self.consulted.set(true);
            Ok(self.dir.clone())
        }
    }

    #[test]
    fn test_resolve_joins_file_name_with_bin_dir() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = BinaryResolver::new(FixedDir::new(temp_dir.path()));

        let platform = PlatformKey::new(OsFamily::Linux, "x86_64");
        let resolved = resolver.resolve(&platform).unwrap();

        assert_eq!(resolved.file_name(), "mcp-hub-linux-amd64");
        assert_eq!(resolved.path(), temp_dir.path().join("mcp-hub-linux-amd64"));
        assert!(resolved.path().is_absolute());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = BinaryResolver::new(FixedDir::new(temp_dir.path()));

        for os in [OsFamily::MacOs, OsFamily::Linux, OsFamily::Windows] {
            for arch in ["x86_64", "aarch64"] {
                let platform = PlatformKey::new(os.clone(), arch);
                assert_eq!(
                    resolver.resolve(&platform).unwrap(),
                    resolver.resolve(&platform).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_resolve_windows_appends_exe() {
        let resolver = BinaryResolver::new(FixedDir::new("/opt/mcp-hub/bin"));
        let platform = PlatformKey::new(OsFamily::Windows, "aarch64");

        let resolved = resolver.resolve(&platform).unwrap();
        assert_eq!(resolved.file_name(), "mcp-hub-windows-arm64.exe");
        assert!(resolved.path().to_string_lossy().ends_with(".exe"));
    }

    #[test]
    fn test_unsupported_os_fails_before_touching_install_location() {
        let consulted = Rc::new(Cell::new(false));
        let resolver = BinaryResolver::new(RecordingLocation {
            dir: PathBuf::from("/opt/mcp-hub/bin"),
            consulted: consulted.clone(),
        });
        let platform = PlatformKey::new(OsFamily::Other("freebsd".to_string()), "x86_64");

        let err = resolver.resolve(&platform).unwrap_err();
        match err {
            LauncherError::UnsupportedPlatform { os, arch } => {
                assert_eq!(os, "freebsd");
                assert_eq!(arch, "amd64");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(!consulted.get());
    }

    #[test]
    fn test_supported_os_consults_install_location() {
        let consulted = Rc::new(Cell::new(false));
        let resolver = BinaryResolver::new(RecordingLocation {
            dir: PathBuf::from("/opt/mcp-hub/bin"),
            consulted: consulted.clone(),
        });

        resolver
            .resolve(&PlatformKey::new(OsFamily::MacOs, "arm64"))
            .unwrap();
        assert!(consulted.get());
    }

    #[test]
    fn test_fixed_dir_relative_path_is_made_absolute() {
        let resolver = BinaryResolver::new(FixedDir::new("relative/bin"));
        let resolved = resolver
            .resolve(&PlatformKey::new(OsFamily::Linux, "aarch64"))
            .unwrap();

        assert!(resolved.path().is_absolute());
        assert!(resolved.path().ends_with("relative/bin/mcp-hub-linux-arm64"));
    }

    #[test]
    fn test_executable_sibling_points_at_bin_dir() {
        let bin_dir = ExecutableSibling.bin_dir().unwrap();
        assert!(bin_dir.ends_with(BIN_DIR_NAME));
        assert!(bin_dir.is_absolute());
    }

    #[test]
    fn test_bin_dir_beside_falls_back_when_path_cannot_be_canonicalized() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("gone").join("mcp-hub-tui");

        let bin_dir = bin_dir_beside(exe).unwrap();
        assert_eq!(bin_dir, temp_dir.path().join("gone").join(BIN_DIR_NAME));
    }

    #[cfg(unix)]
    #[test]
    fn test_bin_dir_beside_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let real_dir = temp_dir.path().join("package");
        let link_dir = temp_dir.path().join("node_modules").join(".bin");
        fs::create_dir_all(&real_dir).unwrap();
        fs::create_dir_all(&link_dir).unwrap();
        let real_exe = real_dir.join("mcp-hub-tui");
        fs::write(&real_exe, "").unwrap();
        let link = link_dir.join("mcp-hub-tui");
        std::os::unix::fs::symlink(&real_exe, &link).unwrap();

        let bin_dir = bin_dir_beside(link).unwrap();
        assert_eq!(
            bin_dir,
            fs::canonicalize(&real_dir).unwrap().join(BIN_DIR_NAME)
        );
    }
}
