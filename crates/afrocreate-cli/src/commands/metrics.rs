// Text metrics for a draft, computed locally

use afrocreate_metrics::{extract_keywords, TextMetrics};
use serde::Serialize;

use super::{Command, TextInput};
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Metrics plus the top keywords
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    #[serde(flatten)]
    pub metrics: TextMetrics,
    pub readability_level: &'static str,
    pub keywords: Vec<String>,
}

impl MetricsReport {
    pub fn from_text(text: &str, keyword_limit: usize) -> Self {
        let metrics = TextMetrics::from_text(text);
        Self {
            metrics,
            readability_level: metrics.readability_level().label(),
            keywords: extract_keywords(text, keyword_limit),
        }
    }
}

/// Word count, reading time, readability and keywords
pub struct MetricsCommand {
    input: TextInput,
    keyword_limit: usize,
    json: bool,
}

impl MetricsCommand {
    pub fn new(input: TextInput, keyword_limit: usize) -> Self {
        Self {
            input,
            keyword_limit,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn run(&self) -> CliResult<MetricsReport> {
        let text = self.input.read()?;
        Ok(MetricsReport::from_text(&text, self.keyword_limit))
    }
}

pub fn render(style: &OutputStyle, report: &MetricsReport) -> String {
    let minutes = report.metrics.reading_time_minutes;
    let mut lines = vec![
        style.header("Content Metrics"),
        style.key_value("Words", &report.metrics.word_count.to_string()),
        style.key_value(
            "Reading time",
            &format!("{} min{}", minutes, if minutes == 1 { "" } else { "s" }),
        ),
        style.key_value(
            "Readability",
            &style.readability_badge(report.metrics.readability_score),
        ),
    ];
    if !report.keywords.is_empty() {
        lines.push(style.key_value("Keywords", &report.keywords.join(", ")));
    }
    lines.join("\n")
}

#[async_trait::async_trait]
impl Command for MetricsCommand {
    async fn execute(&self) -> CliResult<()> {
        let report = self.run()?;
        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", render(&OutputStyle::default(), &report));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_empty_text() {
        let report = MetricsReport::from_text("", 5);
        assert_eq!(report.metrics.word_count, 0);
        assert_eq!(report.metrics.reading_time_minutes, 0);
        assert_eq!(report.readability_level, "hard");
        assert!(report.keywords.is_empty());
    }

    #[test]
    fn test_render_plain() {
        let report = MetricsReport::from_text("The cat sat on the mat.", 5);
        let text = render(&OutputStyle::plain(), &report);
        assert!(text.contains("  Words: 6"));
        assert!(text.contains("  Reading time: 1 min\n"));
        assert!(text.contains("(good)"));
    }

    #[test]
    fn test_json_is_flat_camel_case() {
        let report = MetricsReport::from_text("Lagos traders love Lagos markets", 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["wordCount"], 5);
        assert_eq!(json["readingTimeMinutes"], 1);
        assert_eq!(json["keywords"][0], "lagos");
        assert!(json.get("metrics").is_none());
    }
}
