//! # Prompts Module
//!
//! Provides a custom dialoguer theme for consistent styling across rtmap's
//! interactive prompts.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Returns a custom dialoguer theme matching rtmap's color palette.
pub fn rtmap_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    ..ColorfulTheme::default()
  }
}
