//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! renderings for schema documents and check reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::handlers::check::{CheckReport, CheckStatus};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resource_schema::{ResourceName, SchemaDocument};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, IsTerminal, Write};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a loaded schema document
    fn format_document(&self, name: &ResourceName, document: &SchemaDocument) -> Result<String>;

    /// Format a single node selected from a document
    fn format_node(&self, node: &Value) -> Result<String>;

    /// Format the outcome of a check run
    fn format_check_report(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_document(&self, name: &ResourceName, document: &SchemaDocument) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_document_human(name, document)),
            _ => self.format(document),
        }
    }

    fn format_node(&self, node: &Value) -> Result<String> {
        match (self, node) {
            (OutputFormat::Human, Value::Object(_) | Value::Array(_)) => {
                Ok(serde_json::to_string_pretty(node)?)
            }
            (OutputFormat::Human, scalar) => Ok(format_value_compact(scalar)),
            _ => self.format(node),
        }
    }

    fn format_check_report(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write formatted content, ending with exactly one newline
    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.emit(&formatted)
    }

    /// Write a schema document
    pub fn document(&mut self, name: &ResourceName, document: &SchemaDocument) -> Result<()> {
        let formatted = self.format.format_document(name, document)?;
        self.emit(&formatted)
    }

    /// Write one node of a document
    pub fn node(&mut self, node: &Value) -> Result<()> {
        let formatted = self.format.format_node(node)?;
        self.emit(&formatted)
    }

    /// Write a check report
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        let formatted = if self.format == OutputFormat::Human && self.use_color {
            colorize_check_report(report)
        } else {
            self.format.format_check_report(report)?
        };
        self.emit(&formatted)
    }

    /// Create a progress bar for long operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        let rendered = render_table(headers, &rows);
        let mut lines = rendered.lines();

        if let Some(header_row) = lines.next() {
            if self.use_color {
                self.writeln(&header_row.bold().to_string())?;
            } else {
                self.writeln(header_row)?;
            }
        }
        for line in lines {
            self.writeln(line)?;
        }

        Ok(())
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Render rows under headers with aligned columns
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Calculate column widths
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(width) => format!("{:width$}", cell, width = *width),
                None => cell.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&render_row(headers.to_vec()));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&render_row(row.iter().map(String::as_str).collect()));
        output.push('\n');
    }
    output
}

/// Format a schema document for human reading
fn format_document_human(name: &ResourceName, document: &SchemaDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("Schema: {}\n", name));
    if let Some(type_name) = document.type_name() {
        output.push_str(&format!("Type: {}\n", type_name));
    }
    if let Some(description) = document.description() {
        output.push_str(&format!("Description: {}\n", description));
    }
    if let Some(identifier) = document.get("primaryIdentifier") {
        output.push_str(&format!("Primary identifier: {}\n", format_value_compact(identifier)));
    }

    let required: Vec<&str> = document.required().collect();
    let read_only = pointer_list(document, "readOnlyProperties");
    let create_only = pointer_list(document, "createOnlyProperties");

    let rows: Vec<Vec<String>> = document
        .properties()
        .map(|property| {
            let node = document
                .pointer(&format!("/properties/{}", escape_pointer(property)))
                .cloned()
                .unwrap_or(Value::Null);

            let mut notes = Vec::new();
            if required.contains(&property) {
                notes.push("required");
            }
            if read_only.iter().any(|p| p == property) {
                notes.push("read-only");
            }
            if create_only.iter().any(|p| p == property) {
                notes.push("create-only");
            }

            vec![property.to_string(), property_type(&node), notes.join(", ")]
        })
        .collect();

    if rows.is_empty() {
        output.push_str("Properties: none\n");
    } else {
        output.push_str(&format!("Properties ({}):\n", rows.len()));
        for line in render_table(&["Name", "Type", "Notes"], &rows).lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Property names referenced by a list of `/properties/<name>` pointers
fn pointer_list(document: &SchemaDocument, key: &str) -> Vec<String> {
    document
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter_map(|p| p.strip_prefix("/properties/"))
        .map(|p| p.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Short description of a property's type
fn property_type(node: &Value) -> String {
    if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
        return reference.rsplit('/').next().unwrap_or(reference).to_string();
    }

    match node.get("type") {
        Some(Value::String(t)) if t == "array" => match node.get("items") {
            Some(items) => format!("array<{}>", property_type(items)),
            None => "array".to_string(),
        },
        Some(Value::String(t)) => t.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        _ => "any".to_string(),
    }
}

/// Format a check report for human reading
fn format_check_report_human(report: &CheckReport) -> String {
    let mut output = String::new();

    for outcome in &report.results {
        match &outcome.status {
            CheckStatus::Ok => output.push_str(&format!(
                "ok      {} ({})\n",
                outcome.name,
                outcome.type_name.as_deref().unwrap_or("no typeName")
            )),
            CheckStatus::Failed { error, .. } => {
                output.push_str(&format!("FAILED  {}: {}\n", outcome.name, error))
            }
        }
    }

    output.push_str(&format!(
        "\n{} checked, {} passed, {} failed\n",
        report.total(),
        report.passed(),
        report.failed()
    ));
    output
}

/// Human check report with colored status markers
fn colorize_check_report(report: &CheckReport) -> String {
    format_check_report_human(report)
        .lines()
        .map(|line| {
            if let Some(rest) = line.strip_prefix("ok      ") {
                format!("{}      {}", "ok".green(), rest)
            } else if let Some(rest) = line.strip_prefix("FAILED  ") {
                format!("{}  {}", "FAILED".red().bold(), rest)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a JSON value in a compact, human-readable way
fn format_value_compact(value: &Value) -> String {
    match value {
        // Display on a JSON value escapes the string
        Value::String(_) => value.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            if arr.len() <= 3 {
                format!(
                    "[{}]",
                    arr.iter()
                        .map(format_value_compact)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            } else {
                format!("[{} items]", arr.len())
            }
        }
        Value::Object(obj) => {
            if obj.len() <= 2 {
                let items: Vec<String> = obj
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, format_value_compact(v)))
                    .collect();
                format!("{{{}}}", items.join(", "))
            } else {
                format!("{{{} fields}}", obj.len())
            }
        }
    }
}
