// Output formatting and styling

use std::io::IsTerminal;

use afrocreate_metrics::ReadabilityLevel;
use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: std::io::stdout().is_terminal(),
        }
    }
}

impl OutputStyle {
    /// Plain output, for pipes and tests
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a section header
    pub fn section(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count());
        if self.use_colors {
            format!("\n{}\n{}", title.bold().underline(), rule)
        } else {
            format!("\n{}\n{}", title, rule)
        }
    }

    /// Format a numbered list item
    pub fn numbered_item(&self, number: usize, item: &str) -> String {
        format!("  {}. {}", number, item)
    }

    /// Format a key-value pair
    pub fn key_value(&self, key: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", key.bold(), value)
        } else {
            format!("  {}: {}", key, value)
        }
    }

    /// Readability score with its badge colour: green good, yellow fair, red hard
    pub fn readability_badge(&self, score: u8) -> String {
        let level = ReadabilityLevel::from_score(score);
        let text = format!("{} ({})", score, level.label());
        if !self.use_colors {
            return text;
        }
        match level {
            ReadabilityLevel::Good => text.green().bold().to_string(),
            ReadabilityLevel::Warning => text.yellow().bold().to_string(),
            ReadabilityLevel::Poor => text.red().bold().to_string(),
        }
    }

    /// Format a hashtag line
    pub fn hashtags(&self, tags: &[String]) -> String {
        let line = tags.join(" ");
        if self.use_colors {
            line.cyan().to_string()
        } else {
            line
        }
    }
}

/// Print an error to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle {
        use_colors: std::io::stderr().is_terminal(),
    };
    eprintln!("{}", style.error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_style_without_colors() {
        let style = OutputStyle::plain();
        assert_eq!(style.success("test"), "✓ test");
        assert_eq!(style.error("test"), "✗ test");
        assert_eq!(style.warning("test"), "⚠ test");
        assert_eq!(style.info("test"), "ℹ test");
    }

    #[test]
    fn test_readability_badge_levels() {
        let style = OutputStyle::plain();
        assert_eq!(style.readability_badge(85), "85 (good)");
        assert_eq!(style.readability_badge(70), "70 (good)");
        assert_eq!(style.readability_badge(55), "55 (fair)");
        assert_eq!(style.readability_badge(12), "12 (hard)");
    }

    #[test]
    fn test_section_rule_matches_title_width() {
        let style = OutputStyle::plain();
        assert_eq!(style.section("SEO"), "\nSEO\n───");
    }

    #[test]
    fn test_key_value_and_items() {
        let style = OutputStyle::plain();
        assert_eq!(style.key_value("Words", "120"), "  Words: 120");
        assert_eq!(style.numbered_item(2, "second"), "  2. second");
    }

    #[test]
    fn test_hashtags_joined_with_spaces() {
        let style = OutputStyle::plain();
        let tags = vec!["#SEO".to_string(), "#AfricaRising".to_string()];
        assert_eq!(style.hashtags(&tags), "#SEO #AfricaRising");
    }
}
