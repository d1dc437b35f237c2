//! CLI interface for Revisor

mod input;
mod reviewer;
mod ui;

#[cfg(test)]
mod tests;

pub use input::{read_code, save_improved_code};
pub use reviewer::{CodeReviewer, EMPTY_INPUT_MESSAGE, PARSE_FAILURE_MESSAGE};
pub use ui::{display_banner, display_frameworks, format_report, print_report, print_status_error};

// Re-export core types
pub use revisor_core::{Error, Result};
