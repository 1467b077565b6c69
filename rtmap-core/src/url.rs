//! URL resolution helpers shared across crates.
//!
//! The Jira endpoint is never hardcoded; it comes from a CLI flag or the
//! `JIRA_HOST` environment variable, with the scheme defaulted to https.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Resolve the Jira base URL from an explicit host or the `JIRA_HOST`
/// environment variable.
///
/// The explicit host wins when both are present. If the host doesn't include
/// a scheme (http:// or https://), assumes https://.
pub fn resolve_jira_base_url(explicit_host: Option<&str>) -> Result<String> {
  let host = match explicit_host {
    Some(host) => host.to_string(),
    None => std::env::var(ENV_JIRA_HOST)
      .map_err(|_| anyhow::anyhow!("No Jira host given. Pass --jira-host or set the '{ENV_JIRA_HOST}' environment variable."))?,
  };
  ensure_url_scheme(&host)
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Trailing slashes
/// on the root path are stripped so endpoint paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  if url.host_str().is_none() {
    return Err(anyhow::anyhow!("URL '{input}' has no host"));
  }

  Ok(candidate.trim_end_matches('/').to_string())
}
