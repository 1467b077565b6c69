//! Constants for the rtmap-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("rtmap/", env!("CARGO_PKG_VERSION"));

/// Request timeout applied to every remote call, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
