//! # Issue Mapper
//!
//! The mapping run itself: log in, resolve the custom field id, search, emit
//! one `key:value` record per issue, and release the session.
//!
//! The session is released whenever login succeeded, even if a later step
//! failed; a logout failure is reported as a warning and never masks the
//! outcome of the mapping.

use anyhow::Result;
use rtmap_core::OutputSink;
use rtmap_core::creds::Credentials;
use rtmap_core::output::print_warning;
use rtmap_jira::{JiraClient, Session};
use tracing::{info, warn};

/// Configuration for a mapping run
pub struct MapperConfig {
  /// Display name of the custom field holding the ticket number
  pub field_name: String,
  /// JQL query selecting the issues to map
  pub jql: String,
  /// Cap on the number of issues fetched
  pub max_results: u32,
}

/// Counts reported after a successful run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Issues emitted as `key:value` records
  pub mapped: usize,
  /// Issues skipped because they carry no value for the field
  pub skipped: usize,
}

/// Maps issue keys to the first value of a named custom field
pub struct IssueMapper<'a> {
  client: &'a JiraClient,
  config: MapperConfig,
}

impl<'a> IssueMapper<'a> {
  pub fn new(client: &'a JiraClient, config: MapperConfig) -> Self {
    Self { client, config }
  }

  /// Run the full mapping sequence.
  ///
  /// Strictly sequential: login, field lookup, search, per-issue emission,
  /// logout. Issues without a field value are skipped with a warning rather
  /// than aborting the run.
  pub async fn run(&self, credentials: &Credentials, sink: &mut dyn OutputSink) -> Result<RunSummary> {
    let session = self.client.login(&credentials.username, &credentials.password).await?;

    let outcome = self.map_issues(&session, sink).await;

    // Release the session regardless of how the mapping went
    if let Err(error) = self.client.logout(&session).await {
      warn!(%error, "Failed to release Jira session");
      print_warning(&format!("Failed to log out of Jira: {error}"));
    }

    outcome
  }

  async fn map_issues(&self, session: &Session, sink: &mut dyn OutputSink) -> Result<RunSummary> {
    let field_id = self.client.find_custom_field_id(session, &self.config.field_name).await?;
    info!(field = %self.config.field_name, id = %field_id, "Resolved custom field");

    let issues = self
      .client
      .search_issues(session, &self.config.jql, self.config.max_results)
      .await?;
    info!(count = issues.len(), "Fetched issues");

    let mut summary = RunSummary::default();
    for issue in &issues {
      match issue.first_field_value(&field_id) {
        Ok(value) => {
          sink.write_line(&format!("{}:{}", issue.key, value))?;
          summary.mapped += 1;
        }
        Err(error) if error.is_per_issue() => {
          warn!(issue = %issue.key, "Issue matched the search but has no field value, skipping");
          print_warning(&format!("Skipping {}: no value for '{}'", issue.key, self.config.field_name));
          summary.skipped += 1;
        }
        Err(error) => return Err(error.into()),
      }
    }

    sink.flush()?;
    Ok(summary)
  }
}

#[cfg(test)]
mod tests {
  use rtmap_core::VecSink;
  use rtmap_jira::JiraError;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn test_credentials() -> Credentials {
    Credentials {
      username: "mapper".to_string(),
      password: "secret".to_string(),
    }
  }

  fn test_config() -> MapperConfig {
    MapperConfig {
      field_name: "RT3 Ticket Number".to_string(),
      jql: r#""RT3 Ticket Number" is not EMPTY"#.to_string(),
      max_results: 99999,
    }
  }

  async fn mount_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "session": { "name": "JSESSIONID", "value": "ABC123" }
      })))
      .expect(1)
      .mount(mock_server)
      .await;
  }

  async fn mount_logout(mock_server: &MockServer) {
    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(mock_server)
      .await;
  }

  async fn mount_fields(mock_server: &MockServer) {
    Mock::given(method("GET"))
      .and(path("/rest/api/2/field"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "summary", "name": "Summary", "custom": false },
          { "id": "cf_1", "name": "RT3 Ticket Number", "custom": true }
      ])))
      .mount(mock_server)
      .await;
  }

  async fn mount_search(mock_server: &MockServer, issues: serde_json::Value) {
    Mock::given(method("POST"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "total": issues.as_array().map(Vec::len).unwrap_or(0),
          "issues": issues
      })))
      .mount(mock_server)
      .await;
  }

  fn two_issue_body() -> serde_json::Value {
    serde_json::json!([
        { "id": "10000", "key": "JIRA-1", "fields": { "cf_1": ["RT-1"] } },
        { "id": "10001", "key": "JIRA-2", "fields": { "cf_1": ["RT-2"] } }
    ])
  }

  #[tokio::test]
  async fn test_run_emits_one_line_per_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    mount_logout(&mock_server).await;
    mount_fields(&mock_server).await;
    mount_search(&mock_server, two_issue_body()).await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());
    let mut sink = VecSink::default();

    let summary = mapper.run(&test_credentials(), &mut sink).await?;

    assert_eq!(sink.lines, vec!["JIRA-1:RT-1".to_string(), "JIRA-2:RT-2".to_string()]);
    assert_eq!(summary, RunSummary { mapped: 2, skipped: 0 });

    // Mock expectations verify that login and logout each ran exactly once
    Ok(())
  }

  #[tokio::test]
  async fn test_run_is_idempotent_against_same_service() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "session": { "name": "JSESSIONID", "value": "ABC123" }
      })))
      .expect(2)
      .mount(&mock_server)
      .await;
    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(204))
      .expect(2)
      .mount(&mock_server)
      .await;
    mount_fields(&mock_server).await;
    mount_search(&mock_server, two_issue_body()).await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());

    let mut first = VecSink::default();
    mapper.run(&test_credentials(), &mut first).await?;

    let mut second = VecSink::default();
    mapper.run(&test_credentials(), &mut second).await?;

    assert_eq!(first.lines, second.lines);

    Ok(())
  }

  #[tokio::test]
  async fn test_run_field_not_found_emits_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    // Logout must still happen when the field lookup fails
    mount_logout(&mock_server).await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/field"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "summary", "name": "Summary", "custom": false }
      ])))
      .mount(&mock_server)
      .await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());
    let mut sink = VecSink::default();

    let error = mapper.run(&test_credentials(), &mut sink).await.unwrap_err();

    assert!(sink.lines.is_empty());
    assert!(matches!(
      error.downcast_ref::<JiraError>(),
      Some(JiraError::FieldNotFound(_))
    ));

    Ok(())
  }

  #[tokio::test]
  async fn test_run_skips_issues_without_field_value() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    mount_logout(&mock_server).await;
    mount_fields(&mock_server).await;
    mount_search(
      &mock_server,
      serde_json::json!([
          { "id": "10000", "key": "JIRA-1", "fields": { "cf_1": ["RT-1"] } },
          { "id": "10001", "key": "JIRA-2", "fields": {} },
          { "id": "10002", "key": "JIRA-3", "fields": { "cf_1": ["RT-3"] } }
      ]),
    )
    .await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());
    let mut sink = VecSink::default();

    let summary = mapper.run(&test_credentials(), &mut sink).await?;

    assert_eq!(sink.lines, vec!["JIRA-1:RT-1".to_string(), "JIRA-3:RT-3".to_string()]);
    assert_eq!(summary, RunSummary { mapped: 2, skipped: 1 });

    Ok(())
  }

  #[tokio::test]
  async fn test_run_auth_failure_skips_logout() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "errorMessages": ["Login failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;
    // No session was established, so no logout call is expected
    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());
    let mut sink = VecSink::default();

    let error = mapper.run(&test_credentials(), &mut sink).await.unwrap_err();

    assert!(sink.lines.is_empty());
    assert!(matches!(error.downcast_ref::<JiraError>(), Some(JiraError::Auth)));

    Ok(())
  }

  #[tokio::test]
  async fn test_run_logout_failure_does_not_mask_success() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    mount_fields(&mock_server).await;
    mount_search(&mock_server, two_issue_body()).await;
    Mock::given(method("DELETE"))
      .and(path("/rest/auth/1/session"))
      .respond_with(ResponseTemplate::new(500))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = JiraClient::new(&mock_server.uri())?;
    let mapper = IssueMapper::new(&client, test_config());
    let mut sink = VecSink::default();

    let summary = mapper.run(&test_credentials(), &mut sink).await?;

    assert_eq!(summary.mapped, 2);
    assert_eq!(sink.lines.len(), 2);

    Ok(())
  }
}
