//! # Credential Management
//!
//! Discovery and prompting of authentication credentials for the Jira
//! instance rtmap talks to.
//!
//! Credentials are looked up in the user's `.netrc` file first; when no entry
//! exists for the target host the caller can fall back to an interactive
//! prompt. Both paths are modeled as [`CredentialProvider`] implementations
//! so the mapper can be tested with fixed values and no terminal.

pub mod netrc;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Input, Password};

use crate::creds::netrc::{get_netrc_path, normalize_host, parse_netrc_file};
use crate::prompts::rtmap_theme;

/// Represents credentials for a service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Source of credentials for the Jira session login.
///
/// Injected into the mapper so tests can supply fixed values without any
/// terminal interaction.
pub trait CredentialProvider {
  /// Produce a username/password pair for the target host.
  fn provide_credentials(&self) -> Result<Credentials>;
}

/// Reads credentials for a host from the user's `.netrc` file.
pub struct NetrcProvider {
  home: PathBuf,
  host: String,
}

impl NetrcProvider {
  /// Create a provider that reads `<home>/.netrc` entries for `host`.
  ///
  /// The host may carry a scheme or trailing slash; it is normalized before
  /// the machine lookup.
  pub fn new(home: impl Into<PathBuf>, host: &str) -> Self {
    Self {
      home: home.into(),
      host: normalize_host(host),
    }
  }

  /// Check whether a complete `.netrc` entry exists for the host.
  pub fn has_credentials(&self) -> bool {
    self.lookup().ok().flatten().is_some()
  }

  fn lookup(&self) -> Result<Option<Credentials>> {
    let netrc_path = get_netrc_path(&self.home);
    if !netrc_path.exists() {
      return Ok(None);
    }
    parse_netrc_file(&netrc_path, &self.host)
  }
}

impl CredentialProvider for NetrcProvider {
  fn provide_credentials(&self) -> Result<Credentials> {
    self.lookup()?.with_context(|| {
      format!(
        "Jira credentials not found in .netrc file. Please add credentials for machine '{}'.",
        self.host
      )
    })
  }
}

/// Prompts for credentials on the terminal.
///
/// The username defaults to the invoking OS user; the password prompt does
/// not echo.
pub struct PromptProvider {
  host: String,
}

impl PromptProvider {
  pub fn new(host: &str) -> Self {
    Self {
      host: normalize_host(host),
    }
  }

  /// Best-effort detection of the invoking OS user for the username default.
  fn default_username() -> Option<String> {
    std::env::var("USER")
      .or_else(|_| std::env::var("USERNAME"))
      .ok()
      .filter(|user| !user.is_empty())
  }
}

impl CredentialProvider for PromptProvider {
  fn provide_credentials(&self) -> Result<Credentials> {
    let theme = rtmap_theme();

    let mut input = Input::with_theme(&theme).with_prompt(format!("Username for {}", self.host));
    if let Some(user) = Self::default_username() {
      input = input.default(user);
    }
    let username: String = input.interact_text().context("Failed to read username")?;

    let password = Password::with_theme(&theme)
      .with_prompt(format!("Password for {}@{}", username, self.host))
      .interact()
      .context("Failed to read password")?;

    Ok(Credentials { username, password })
  }
}
