use std::time::Duration;

use reqwest::{Client, Response};

use crate::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::JiraError;
use crate::models::Session;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl JiraClient {
  /// Create a new Jira client for the given base URL
  pub fn new(base_url: &str) -> Result<Self, JiraError> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
      .build()?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  /// The base URL this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build a GET request carrying the session cookie
  pub(crate) fn get_with_session(&self, path: &str, session: &Session) -> reqwest::RequestBuilder {
    self
      .client
      .get(format!("{}{}", self.base_url, path))
      .header(reqwest::header::COOKIE, session.cookie())
  }

  /// Build a POST request carrying the session cookie
  pub(crate) fn post_with_session(&self, path: &str, session: &Session) -> reqwest::RequestBuilder {
    self
      .client
      .post(format!("{}{}", self.base_url, path))
      .header(reqwest::header::COOKIE, session.cookie())
  }

  /// Turn an unexpected response into an [`JiraError::Api`]
  pub(crate) async fn api_error(response: Response) -> JiraError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    JiraError::Api { status, message }
  }
}

/// Create a Jira client for the given base URL
pub fn create_jira_client(base_url: &str) -> Result<JiraClient, JiraError> {
  JiraClient::new(base_url)
}
