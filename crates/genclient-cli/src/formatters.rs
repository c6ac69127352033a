//! Output formatters for CLI commands.
//!
//! Every command result is serializable and printed in one of three modes:
//! pretty-printed JSON, flattened `key: value` lines, or colorized output.

use anyhow::Result;
use colored::Colorize;
use genclient_core::cli::OutputFormat;
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
/// use genclient_cli::formatters::format_output;
/// use genclient_core::ClientInfo;
/// use genclient_core::cli::OutputFormat;
///
/// let info = ClientInfo::new("storage", "pkg/model/storage/svc/client.go");
///
/// let output = format_output(&info, OutputFormat::Json)?;
/// assert!(output.contains("\"group\": \"storage\""));
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
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Format data as `path: value` lines, one per scalar.
    ///
    /// Nested fields are joined with `.` and array items are indexed, e.g.
    /// `generated[0].output: pkg/client/storage/generated.storage.go`.
    /// Suitable for `grep` and `cut`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: String, lines: &mut Vec<String>) {
        match value {
            Value::Object(obj) if !obj.is_empty() => {
                for (key, val) in obj {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(val, child, lines);
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for (i, item) in arr.iter().enumerate() {
                    flatten(item, format!("{path}[{i}]"), lines);
                }
            }
            scalar => {
                let rendered = match scalar {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                if path.is_empty() {
                    lines.push(rendered);
                } else {
                    lines.push(format!("{path}: {rendered}"));
                }
            }
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};

    /// Format data as colorized, human-readable output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(format_value(&value, 0))
    }

    /// Recursively format a JSON value with colors and indentation.
    fn format_value(value: &serde_json::Value, indent: usize) -> String {
        use serde_json::Value;

        let indent_str = "  ".repeat(indent);
        let next_indent_str = "  ".repeat(indent + 1);

        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            // Multi-line strings are generated sources; print them as-is.
            Value::String(s) if s.contains('\n') => format!("\n{s}"),
            Value::String(s) => s.green().to_string(),
            Value::Array(arr) => {
                if arr.is_empty() {
                    return "(none)".dimmed().to_string();
                }

                let mut result = String::new();
                for item in arr {
                    result.push('\n');
                    result.push_str(&next_indent_str);
                    result.push_str("- ");
                    result.push_str(format_value(item, indent + 2).trim_start());
                }
                result
            }
            Value::Object(obj) => {
                if obj.is_empty() {
                    return "{}".to_string();
                }

                let mut result = String::new();
                for (i, (key, val)) in obj.iter().enumerate() {
                    if i > 0 || indent > 0 {
                        result.push('\n');
                        result.push_str(&indent_str);
                    }
                    result.push_str(&key.blue().bold().to_string());
                    result.push(':');
                    let rendered = format_value(val, indent + 1);
                    if !rendered.starts_with('\n') {
                        result.push(' ');
                    }
                    result.push_str(&rendered);
                }
                result
            }
        }
    }
}
