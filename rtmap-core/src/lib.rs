//! # rtmap Core Library
//!
//! Shared building blocks for the rtmap CLI and service client: credential
//! discovery and prompting, output sinks, host resolution, and colored
//! terminal output helpers.

pub mod creds;
pub mod output;
pub mod prompts;
pub mod sink;
pub mod url;

pub use creds::{CredentialProvider, Credentials};
pub use sink::{FileSink, OutputSink, StdoutSink, VecSink};
