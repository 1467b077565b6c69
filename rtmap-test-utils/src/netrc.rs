//! `.netrc` isolation for testing
//!
//! Provides a RAII guard that creates a temporary HOME directory holding a
//! `.netrc` file with the given content, so credential tests never touch the
//! user's real home directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for test `.netrc` files
///
/// This struct creates a temporary `.netrc` file with the given content, sets
/// the HOME environment variable to point to the temporary directory, and
/// restores the original HOME environment variable when dropped.
pub struct NetrcGuard {
  #[allow(dead_code)]
  temp_dir: TempDir,
  netrc_path: PathBuf,
  original_home: Option<String>,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let guard = Self::empty_home();

    let mut file = fs::File::create(&guard.netrc_path).expect("Failed to create test .netrc");
    file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

    guard
  }

  /// Create a guard whose temporary HOME contains no `.netrc` file
  pub fn empty_home() -> Self {
    let original_home = std::env::var("HOME").ok();

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    // Point HOME at the temporary directory
    unsafe {
      std::env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      netrc_path,
      original_home,
    }
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Drop for NetrcGuard {
  fn drop(&mut self) {
    // Restore original HOME environment variable
    match &self.original_home {
      Some(home) => unsafe {
        std::env::set_var("HOME", home);
      },
      None => unsafe {
        std::env::remove_var("HOME");
      },
    }
  }
}
