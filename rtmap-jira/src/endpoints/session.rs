//! # Jira Session Endpoints
//!
//! Session establishment and teardown. Login returns the opaque session
//! cookie that every other call must carry; logout releases it.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{LoginRequest, LoginResponse, Session};

impl JiraClient {
  /// Log in and return the session token.
  ///
  /// Rejected credentials (401/403) yield [`JiraError::Auth`].
  pub async fn login(&self, username: &str, password: &str) -> Result<Session, JiraError> {
    let url = format!("{}/rest/auth/1/session", self.base_url);

    let request = LoginRequest {
      username: username.to_string(),
      password: password.to_string(),
    };

    let response = self.client.post(&url).json(&request).send().await?;

    match response.status() {
      StatusCode::OK => {
        let login = response.json::<LoginResponse>().await?;
        debug!(cookie_name = %login.session.name, "Jira session established");
        Ok(login.session)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::Auth),
      _ => Err(Self::api_error(response).await),
    }
  }

  /// Release the session token.
  ///
  /// Callers treat this as best effort; a failure here must not mask the
  /// outcome of the mapping run.
  pub async fn logout(&self, session: &Session) -> Result<(), JiraError> {
    let response = self
      .client
      .delete(format!("{}/rest/auth/1/session", self.base_url))
      .header(reqwest::header::COOKIE, session.cookie())
      .send()
      .await?;

    if response.status().is_success() {
      debug!("Jira session released");
      Ok(())
    } else {
      Err(Self::api_error(response).await)
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::error::JiraError;

  #[tokio::test]
  async fn test_login_returns_session() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri())?;

    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .and(body_json(serde_json::json!({
          "username": "mapper",
          "password": "secret"
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "session": {
              "name": "JSESSIONID",
              "value": "ABC123"
          },
          "loginInfo": {
              "failedLoginCount": 0,
              "loginCount": 17
          }
      })))
      .mount(&mock_server)
      .await;

    let session = client.login("mapper", "secret").await?;
    assert_eq!(session.cookie(), "JSESSIONID=ABC123");

    Ok(())
  }

  #[tokio::test]
  async fn test_login_rejected_credentials() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri())?;

    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "errorMessages": ["Login failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.login("mapper", "wrong").await;
    assert!(matches!(result, Err(JiraError::Auth)));

    Ok(())
  }

  #[tokio::test]
  async fn test_logout_releases_session() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri())?;

    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "session": { "name": "JSESSIONID", "value": "ABC123" }
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .and(wiremock::matchers::header("Cookie", "JSESSIONID=ABC123"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let session = client.login("mapper", "secret").await?;
    client.logout(&session).await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_logout_failure_is_reported() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri())?;

    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "session": { "name": "JSESSIONID", "value": "ABC123" }
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&mock_server)
      .await;

    let session = client.login("mapper", "secret").await?;
    let result = client.logout(&session).await;
    assert!(matches!(result, Err(JiraError::Api { status: 500, .. })));

    Ok(())
  }
}
