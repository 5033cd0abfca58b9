#![allow(dead_code)]

pub mod test_install;

pub use test_install::TestInstallGuard;
