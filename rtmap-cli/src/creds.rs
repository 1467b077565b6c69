//! # Credential Resolution
//!
//! Picks the credential source for a run: the user's `.netrc` entry for the
//! Jira host when one exists, otherwise an interactive prompt.

use anyhow::{Context, Result};
use directories::BaseDirs;
use rtmap_core::creds::{CredentialProvider, Credentials, NetrcProvider, PromptProvider};
use tracing::debug;

/// Resolve credentials for the Jira host.
pub fn resolve_credentials(host: &str) -> Result<Credentials> {
  let base_dirs = BaseDirs::new().context("Could not determine home directory")?;

  let netrc = NetrcProvider::new(base_dirs.home_dir(), host);
  if netrc.has_credentials() {
    debug!("Using credentials from .netrc");
    return netrc.provide_credentials();
  }

  debug!("No .netrc entry for host, prompting for credentials");
  PromptProvider::new(host).provide_credentials()
}
