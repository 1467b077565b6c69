//! # Command Line Interface
//!
//! Defines the CLI surface for rtmap and wires the argument values into the
//! mapping run: host resolution, credential lookup, sink selection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rtmap_core::output::{ColorMode, apply_color_mode, print_success};
use rtmap_core::url::resolve_jira_base_url;
use rtmap_core::{FileSink, OutputSink, StdoutSink};
use rtmap_jira::create_jira_client;
use tokio::runtime::Runtime;

use crate::creds::resolve_credentials;
use crate::mapper::{IssueMapper, MapperConfig};

/// Default display name of the custom field holding the RT ticket number
pub const DEFAULT_FIELD_NAME: &str = "RT3 Ticket Number";

/// Default cap on the number of issues returned by the search
pub const DEFAULT_MAX_RESULTS: u32 = 99999;

/// Top-level CLI command for the rtmap tool
#[derive(Parser)]
#[command(name = "rtmap")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Map Jira issues to their RT ticket numbers")]
#[command(
  long_about = "rtmap logs into a Jira instance, finds the custom field holding RT ticket\n\
        numbers, searches for every issue with a value in that field, and prints one\n\
        '<issueKey>:<ticketNumber>' line per issue."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Jira host to talk to (falls back to the JIRA_HOST environment variable)
  #[arg(long, value_name = "HOST")]
  pub jira_host: Option<String>,

  /// Display name of the custom field to map
  #[arg(long, value_name = "NAME", default_value = DEFAULT_FIELD_NAME)]
  pub field: String,

  /// JQL query selecting the issues to map
  #[arg(
    long,
    value_name = "JQL",
    long_help = "JQL query selecting the issues to map.\n\
               Defaults to '\"<field>\" is not EMPTY' for the configured field."
  )]
  pub jql: Option<String>,

  /// Maximum number of issues to fetch
  #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RESULTS)]
  pub max_results: u32,

  /// Write the mapping to a file instead of stdout
  #[arg(long, short = 'o', value_name = "PATH")]
  pub output: Option<PathBuf>,
}

impl Cli {
  /// The effective JQL query, deriving the default from the field name.
  pub fn effective_jql(&self) -> String {
    match &self.jql {
      Some(jql) => jql.clone(),
      None => format!("\"{}\" is not EMPTY", self.field),
    }
  }
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  apply_color_mode(cli.colors);

  let base_url = resolve_jira_base_url(cli.jira_host.as_deref())?;
  let credentials = resolve_credentials(&base_url)?;

  let client = create_jira_client(&base_url).context("Failed to create Jira client")?;

  let config = MapperConfig {
    field_name: cli.field.clone(),
    jql: cli.effective_jql(),
    max_results: cli.max_results,
  };
  let mapper = IssueMapper::new(&client, config);

  let mut sink: Box<dyn OutputSink> = match &cli.output {
    Some(path) => Box::new(FileSink::create(path)?),
    None => Box::new(StdoutSink),
  };

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let summary = rt.block_on(mapper.run(&credentials, sink.as_mut()))?;

  print_success(&format!(
    "Mapped {} issue(s){}",
    summary.mapped,
    if summary.skipped > 0 {
      format!(", skipped {} without a field value", summary.skipped)
    } else {
      String::new()
    }
  ));

  Ok(())
}
