// SPDX-License-Identifier: MIT OR Apache-2.0
//! Output formatting utilities for the `tcvpc` CLI.

use crate::commands::{CodeInfo, ParseReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tcvpc_error::ErrorCategory;

/// Supported output formats for CLI display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Compact JSON (single line).
    Json,
    /// Pretty-printed JSON.
    JsonPretty,
    /// Human-readable multi-line text.
    Text,
    /// Aligned columns, one row per item.
    Table,
    /// Single-line summary.
    Compact,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
            Self::Text => "text",
            Self::Table => "table",
            Self::Compact => "compact",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "json-pretty" | "json_pretty" | "jsonpretty" => Ok(Self::JsonPretty),
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Formats lookup results and parse reports for CLI output.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Create a new formatter with the given output format.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn json<T: Serialize>(&self, value: &T) -> String {
        match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value).unwrap_or_default(),
            _ => serde_json::to_string(value).unwrap_or_default(),
        }
    }

    /// Format a single table entry.
    #[must_use]
    pub fn format_code(&self, info: &CodeInfo) -> String {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => self.json(info),
            OutputFormat::Text => format_code_text(info),
            OutputFormat::Table => format_code_row(info),
            OutputFormat::Compact => format_code_compact(info),
        }
    }

    /// Format a list of table entries.
    #[must_use]
    pub fn format_codes(&self, infos: &[CodeInfo]) -> String {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => self.json(&infos),
            OutputFormat::Text => infos
                .iter()
                .map(format_code_text)
                .collect::<Vec<_>>()
                .join("\n\n"),
            OutputFormat::Table => infos
                .iter()
                .map(format_code_row)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Compact => infos
                .iter()
                .map(format_code_compact)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Format per-category counts.
    #[must_use]
    pub fn format_categories(&self, counts: &BTreeMap<ErrorCategory, usize>) -> String {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => self.json(counts),
            OutputFormat::Text | OutputFormat::Table => counts
                .iter()
                .map(|(cat, n)| format!("{:<24} {n:>4}", cat.as_str()))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Compact => counts
                .iter()
                .map(|(cat, n)| format!("{cat}={n}"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Format the classification of an API response.
    #[must_use]
    pub fn format_report(&self, report: &ParseReport) -> String {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => self.json(report),
            OutputFormat::Text | OutputFormat::Table => format_report_text(report),
            OutputFormat::Compact => format_report_compact(report),
        }
    }

    /// Format an error message according to the configured output format.
    #[must_use]
    pub fn format_error(&self, err: &str) -> String {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => {
                serde_json::json!({"error": err}).to_string()
            }
            OutputFormat::Text => format!("Error: {err}"),
            OutputFormat::Table => format!("error  {err}"),
            OutputFormat::Compact => format!("[error] {err}"),
        }
    }
}

// ── Code formatters ───────────────────────────────────────────────────

fn format_code_text(info: &CodeInfo) -> String {
    format!(
        "Code:        {}\nConstant:    {}\nCategory:    {}\nBase:        {}\nSub-code:    {}\nDescription: {}",
        info.code,
        info.const_name,
        info.category,
        info.base,
        info.sub_code.unwrap_or("-"),
        info.description,
    )
}

fn format_code_row(info: &CodeInfo) -> String {
    format!(
        "{:<64} {:<24} {}",
        info.code,
        info.category.as_str(),
        info.description
    )
}

fn format_code_compact(info: &CodeInfo) -> String {
    format!("{} [{}]", info.code, info.category)
}

// ── Report formatters ─────────────────────────────────────────────────

fn format_report_text(r: &ParseReport) -> String {
    let Some(err) = &r.error else {
        return "Status: ok".into();
    };
    let mut lines = vec![
        "Status: error".to_string(),
        format!("Code: {}", err.code),
        format!("Message: {}", err.message),
        format!("Category: {}", err.category),
        format!("RequestId: {}", err.request_id.as_deref().unwrap_or("-")),
        format!("Known: {}", if r.known.is_some() { "yes" } else { "no" }),
        format!("Rate limited: {}", if r.rate_limited { "yes" } else { "no" }),
    ];
    if let Some(info) = &r.known {
        lines.push(format!("Description: {}", info.description));
    }
    lines.join("\n")
}

fn format_report_compact(r: &ParseReport) -> String {
    match &r.error {
        None => "[ok]".into(),
        Some(err) => format!("[error] {} ({})", err.code, err.category),
    }
}
