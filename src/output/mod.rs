//
//  cloudfoundry-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Terminal output for the `cf` binary.
//!
//! - **Text**: coloured status lines on stdout/stderr and a spinner while
//!   waiting on background work
//! - **JSON**: one object per command on stdout, no spinner
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloudfoundry_client::output::OutputWriter;
//!
//! let writer = OutputWriter::text();
//! let spinner = writer.spinner("Deleting space test-space");
//! // ... await the operation ...
//! spinner.finish_and_clear();
//! writer.write_success("Deleted space test-space", serde_json::json!({"space": "test-space"}))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Writes command results in the selected format.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn text() -> Self {
        Self::new(OutputFormat::Text)
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Starts a spinner on stderr.
    ///
    /// Hidden in JSON mode and when stderr is not a terminal.
    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.format == OutputFormat::Json || !console::Term::stderr().is_term() {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.into());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Reports success: a check-marked line, or `details` as JSON.
    pub fn write_success<T: Serialize>(&self, msg: &str, details: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(details)?;
                if let Some(object) = value.as_object_mut() {
                    object.insert("success".to_string(), serde_json::Value::Bool(true));
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text if self.color => println!("{} {}", style("✓").green().bold(), msg),
            OutputFormat::Text => println!("✓ {}", msg),
        }
        Ok(())
    }

    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Prints a plain value, e.g. a config entry.
    pub fn write_value(&self, key: &str, value: Option<&str>) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let result = serde_json::json!({ "key": key, "value": value });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => {
                if let Some(value) = value {
                    println!("{}", value);
                }
            }
        }
        Ok(())
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::text()
    }
}
