// Generate content for a topic

use std::path::{Path, PathBuf};
use std::sync::Arc;

use afrocreate_metrics::slugify;
use afrocreate_providers::{ContentProvider, GeneratedContent, GenerationRequest};
use tracing::info;

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Generate a piece of content
pub struct GenerateCommand {
    provider: Arc<dyn ContentProvider>,
    request: GenerationRequest,
    json: bool,
    save_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn new(provider: Arc<dyn ContentProvider>, request: GenerationRequest) -> Self {
        Self {
            provider,
            request,
            json: false,
            save_dir: None,
        }
    }

    /// Print the raw JSON response instead of formatted text
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Also write the body to `<dir>/<slug>.md`
    pub fn with_save_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.save_dir = dir;
        self
    }

    /// Run the request and return what would be printed
    pub async fn run(&self) -> CliResult<String> {
        let content = self.provider.generate(self.request.clone()).await?;

        if let Some(dir) = &self.save_dir {
            let path = save_body(dir, &content, &self.request.topic)?;
            info!(path = %path.display(), "saved generated content");
        }

        if self.json {
            serde_json::to_string_pretty(&content).map_err(|e| CliError::Internal(e.to_string()))
        } else {
            Ok(render(&OutputStyle::default(), &content))
        }
    }
}

/// File name for saved content: the slugged title, or the topic without one
pub fn output_path(dir: &Path, content: &GeneratedContent, topic: &str) -> PathBuf {
    let stem = content
        .title
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(topic));
    dir.join(format!("{}.md", if stem.is_empty() { "content" } else { stem.as_str() }))
}

fn save_body(dir: &Path, content: &GeneratedContent, topic: &str) -> CliResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, content, topic);
    std::fs::write(&path, &content.body)?;
    Ok(path)
}

/// Human readable rendering of generated content
pub fn render(style: &OutputStyle, content: &GeneratedContent) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &content.title {
        lines.push(style.header(title));
        lines.push(String::new());
    }
    lines.push(content.body.clone());

    if let Some(hashtags) = content.hashtags.as_deref().filter(|h| !h.is_empty()) {
        lines.push(style.section("Hashtags"));
        lines.push(style.hashtags(hashtags));
    }

    lines.push(style.section("SEO"));
    if let Some(seo_title) = &content.seo_title {
        lines.push(style.key_value("Title", seo_title));
    }
    if let Some(seo_description) = &content.seo_description {
        lines.push(style.key_value("Description", seo_description));
    }
    if !content.suggested_keywords.is_empty() {
        lines.push(style.key_value("Keywords", &content.suggested_keywords.join(", ")));
    }
    lines.push(style.key_value(
        "Readability",
        &style.readability_badge(content.readability_score),
    ));

    lines.join("\n")
}

#[async_trait::async_trait]
impl Command for GenerateCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", self.run().await?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedContent {
        GeneratedContent {
            body: "Body".to_string(),
            title: Some("Palm Oil: A Buyer's Guide".to_string()),
            seo_title: Some("Palm Oil | Ultimate Guide 2026".to_string()),
            seo_description: None,
            suggested_keywords: vec!["palm oil guide".to_string()],
            hashtags: Some(vec!["#SEO".to_string()]),
            readability_score: 72,
        }
    }

    #[test]
    fn test_render_includes_sections() {
        let text = render(&OutputStyle::plain(), &sample());
        assert!(text.starts_with("Palm Oil: A Buyer's Guide\n\nBody"));
        assert!(text.contains("#SEO"));
        assert!(text.contains("  Title: Palm Oil | Ultimate Guide 2026"));
        assert!(text.contains("  Keywords: palm oil guide"));
        assert!(text.contains("  Readability: 72 (good)"));
        assert!(!text.contains("Description"));
    }

    #[test]
    fn test_output_path_uses_slugged_title() {
        let path = output_path(Path::new("out"), &sample(), "Palm Oil");
        assert_eq!(path, PathBuf::from("out/palm-oil-a-buyers-guide.md"));
    }
}
