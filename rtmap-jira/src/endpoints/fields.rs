//! # Jira Field Endpoints
//!
//! Custom field discovery. The mapper only needs to turn a display name
//! ("RT3 Ticket Number") into a stable field id (`customfield_NNNNN`).

use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{CustomField, Session};

impl JiraClient {
  /// List all custom fields defined on the Jira instance.
  pub async fn get_custom_fields(&self, session: &Session) -> Result<Vec<CustomField>, JiraError> {
    let response = self.get_with_session("/rest/api/2/field", session).send().await?;

    match response.status() {
      StatusCode::OK => {
        let fields = response.json::<Vec<CustomField>>().await?;
        let custom: Vec<CustomField> = fields.into_iter().filter(|field| field.custom).collect();
        debug!(count = custom.len(), "Fetched custom fields");
        Ok(custom)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::Auth),
      _ => Err(Self::api_error(response).await),
    }
  }

  /// Return the id of the first custom field whose name matches exactly.
  ///
  /// Fails with [`JiraError::FieldNotFound`] when no field carries the name.
  pub async fn find_custom_field_id(&self, session: &Session, name: &str) -> Result<String, JiraError> {
    let fields = self.get_custom_fields(session).await?;

    fields
      .into_iter()
      .find(|field| field.name == name)
      .map(|field| field.id)
      .ok_or_else(|| JiraError::FieldNotFound(name.to_string()))
  }
}
