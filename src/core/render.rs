//! VM-004: Rendering sequences for stdout and building the demonstration output.

use crate::core::transform::{self, SOURCE};
use crate::core::types::Value;
use crate::core::widen;
use serde::Serialize;
use std::fmt;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Debug-list text (`[1, 2, 3, "Hello world"]`)
    #[default]
    Text,
    /// Compact JSON array
    Json,
}

/// Render `[a, b, c]` using each element's `Display`.
pub fn render_text<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Render a compact JSON array.
pub fn render_json<T: Serialize>(items: &[T]) -> Result<String, String> {
    serde_json::to_string(items).map_err(|e| format!("JSON serialization error: {}", e))
}

fn render<T: fmt::Display + Serialize>(items: &[T], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_text(items)),
        OutputFormat::Json => render_json(items),
    }
}

/// The two lines the program prints: the incremented sequence, then the
/// widened sequence after the greeting is appended.
pub fn demo_lines(format: OutputFormat) -> Result<Vec<String>, String> {
    let derived = transform::increment_all(&SOURCE)?;

    let mut mixed = widen::widen(SOURCE);
    widen::append_greeting(&mut mixed);

    Ok(vec![render(&derived, format)?, render(&mixed, format)?])
}

/// One descriptive line per item, starting from `[2]` plus the greeting.
pub fn item_lines() -> Vec<String> {
    let mut items = vec![Value::Number(2)];
    widen::append_greeting(&mut items);
    items.iter().map(Value::describe).collect()
}
