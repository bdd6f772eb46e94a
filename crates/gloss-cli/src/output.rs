//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use gloss_domain::{AnnotationTable, Summary};
use gloss_pipeline::{to_csv, PipelineOutput};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a complete pipeline run.
    pub fn format_output(&self, output: &PipelineOutput) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_output_json(output),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}",
                self.format_summary(&output.summary),
                self.format_table(&output.table)
            )),
            OutputFormat::Quiet => Ok(to_csv(&output.table)?),
        }
    }

    /// Format the subtopic summary.
    pub fn format_summary(&self, summary: &Summary) -> String {
        if summary.is_empty() {
            return self.colorize("No summary returned.", "yellow");
        }
        format!("{}\n{}", self.colorize("Summary", "cyan"), summary)
    }

    /// Format the keyword table.
    pub fn format_table(&self, table: &AnnotationTable) -> String {
        if table.is_empty() {
            return self.colorize("No keywords found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(table.header());

        for row in table.rows() {
            let annotation = row.annotation.to_string();
            let annotation = if row.annotation.is_failed() {
                self.colorize(&annotation, "red")
            } else {
                annotation
            };
            builder.push_record([row.keyword.to_string(), annotation]);
        }

        let mut rendered = builder.build();
        rendered
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        rendered.to_string()
    }

    /// Format a run as JSON.
    fn format_output_json(&self, output: &PipelineOutput) -> Result<String> {
        let rows: Vec<serde_json::Value> = output
            .table
            .rows()
            .iter()
            .map(|row| {
                serde_json::json!({
                    "word": row.keyword.as_str(),
                    "annotation": row.annotation.to_string(),
                    "failed": row.annotation.is_failed(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "url": output.url,
            "mode": output.table.mode(),
            "summary": output.summary.lines().collect::<Vec<_>>(),
            "keywords": output.keywords.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
            "rows": rows,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_domain::{Annotation, AnnotationMode, Keyword};

    fn create_test_output() -> PipelineOutput {
        let cats = Keyword::from_token("cats").unwrap();
        let dogs = Keyword::from_token("dogs").unwrap();

        let mut table = AnnotationTable::new(AnnotationMode::Synonym);
        table.push(cats.clone(), Annotation::text("Feline, kitty"));
        table.push(dogs.clone(), Annotation::Failed("rate limited".to_string()));

        PipelineOutput {
            url: "https://example.com/pets".to_string(),
            summary: Summary::from_response("1. Pets\n- Cats are popular"),
            keywords: vec![cats, dogs],
            table,
        }
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_output(&create_test_output()).unwrap();
        assert!(output.contains("Summary"));
        assert!(output.contains("Cats are popular"));
        assert!(output.contains("Word"));
        assert!(output.contains("Synonym"));
        assert!(output.contains("feline, kitty"));
        assert!(output.contains("error: rate limited"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_output(&create_test_output()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "synonym");
        assert_eq!(value["keywords"][1], "dogs");
        assert_eq!(value["rows"][0]["annotation"], "feline, kitty");
        assert_eq!(value["rows"][1]["failed"], true);
    }

    #[test]
    fn test_quiet_format_is_csv() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_output(&create_test_output()).unwrap();
        assert!(output.starts_with("Word,Synonym\n"));
        assert!(output.contains("cats,\"feline, kitty\"\n"));
        assert!(!output.contains("Summary"));
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_table(&AnnotationTable::new(AnnotationMode::Explanation));
        assert!(output.contains("No keywords found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
