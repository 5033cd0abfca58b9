use mcp_hub_tui::platform::PlatformKey;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a throwaway install layout under target/home with a random 8-character name
/// The directory will be automatically cleaned up when the guard is dropped
pub struct TestInstallGuard {
    path: PathBuf,
}

impl TestInstallGuard {
    pub fn new() -> Self {
        // Generate random 8-character string with letters and numbers
        let random_name: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        let path = std::path::absolute(PathBuf::from("target/home").join(random_name))
            .expect("Failed to resolve test install directory");
        fs::create_dir_all(&path).expect("Failed to create test install directory");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.path.join("bin")
    }

    pub fn setup_bin_dir(&self) -> &Self {
        fs::create_dir_all(self.bin_dir()).expect("Failed to create bin directory");
        self
    }

    /// Path the launcher resolves to on this host.
    pub fn binary_path(&self) -> PathBuf {
        let file_name = PlatformKey::current()
            .binary_file_name()
            .expect("tests run on a supported platform");
        self.bin_dir().join(file_name)
    }

    /// Install a shell script as the platform binary.
    #[cfg(unix)]
    pub fn install_script(&self, body: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.setup_bin_dir();
        let path = self.binary_path();
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to set script permissions");
        path
    }
}

impl Drop for TestInstallGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            fs::remove_dir_all(&self.path).unwrap_or_else(|e| {
                eprintln!(
                    "Failed to cleanup test directory {}: {e}",
                    self.path.display()
                );
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = TestInstallGuard::new();
            let path = guard.path().to_path_buf();
            assert!(path.exists());
            assert!(path.parent().unwrap().ends_with("target/home"));
            path
        };
        // After guard is dropped, directory should be cleaned up
        assert!(!test_path.exists());
    }

    #[test]
    fn test_setup_bin_dir() {
        let guard = TestInstallGuard::new();
        let guard = guard.setup_bin_dir();
        assert!(guard.bin_dir().is_dir());
        assert!(guard.binary_path().starts_with(guard.bin_dir()));
    }
}
