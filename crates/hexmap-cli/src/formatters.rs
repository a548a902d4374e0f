//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text, and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use hexmap_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use hexmap_cli::formatters::format_output;
/// use hexmap_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     tiles: usize,
///     path: String,
/// }
///
/// let summary = Summary { tiles: 2, path: "mapdump.txt".to_string() };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"tiles\": 2"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as a single line, suitable for piping.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;
    use std::fmt::Write;

    /// Format data as colorized `key: value` lines.
    ///
    /// Nested objects and arrays are indented beneath their key.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0)?;
        Ok(out.trim_end().to_string())
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(arr) if arr.is_empty() => "[]".dimmed().to_string(),
            Value::Object(obj) if obj.is_empty() => "{}".dimmed().to_string(),
            Value::Array(_) | Value::Object(_) => String::new(),
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(obj) => !obj.is_empty(),
            _ => false,
        }
    }

    fn write_value(out: &mut String, value: &Value, indent: usize) -> Result<()> {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(obj) if !obj.is_empty() => {
                for (key, val) in obj {
                    if is_nested(val) {
                        writeln!(out, "{pad}{}:", key.blue().bold())?;
                        write_value(out, val, indent + 1)?;
                    } else {
                        writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar(val))?;
                    }
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for item in arr {
                    if is_nested(item) {
                        writeln!(out, "{pad}-")?;
                        write_value(out, item, indent + 1)?;
                    } else {
                        writeln!(out, "{pad}- {}", scalar(item))?;
                    }
                }
            }
            other => writeln!(out, "{pad}{}", scalar(other))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestSummary {
        path: String,
        tiles: usize,
        strict: bool,
        names: Vec<String>,
    }

    fn sample() -> TestSummary {
        TestSummary {
            path: "mapdump.txt".to_string(),
            tiles: 2,
            strict: false,
            names: vec!["Stonecradle".to_string(), "AllodsBight".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&sample()).unwrap();
        assert!(output.contains("\"path\": \"mapdump.txt\""));
        assert!(output.contains("\"tiles\": 2"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&sample()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"tiles\":2"));
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = pretty::format(&sample()).unwrap();

        assert!(output.contains("path: mapdump.txt"));
        assert!(output.contains("tiles: 2"));
        assert!(output.contains("strict: false"));
        assert!(output.contains("names:\n  - Stonecradle\n  - AllodsBight"));
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = sample();
        for format in [OutputFormat::Json, OutputFormat::Text, OutputFormat::Pretty] {
            let output = format_output(&data, format).unwrap();
            assert!(output.contains("mapdump.txt"), "{format} output lost data");
        }
    }
}
