//! # Jira API Client
//!
//! Provides the Jira REST API integration rtmap needs to map issues to their
//! RT ticket numbers: session login/logout, custom field discovery, and JQL
//! search.

mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export errors and models
pub use error::JiraError;
pub use models::{CustomField, Issue, SearchResults, Session};
