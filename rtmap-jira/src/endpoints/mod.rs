//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the resources rtmap touches:
//! session management, field discovery, and JQL search.

pub mod fields;
pub mod search;
pub mod session;
