// Continuation suggestions for a draft

use std::sync::Arc;

use afrocreate_providers::{ContentProvider, ContentType};
use tracing::warn;

use super::{Command, TextInput};
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Suggest ways to continue a draft
pub struct SuggestCommand {
    provider: Arc<dyn ContentProvider>,
    input: TextInput,
    content_type: ContentType,
}

impl SuggestCommand {
    pub fn new(provider: Arc<dyn ContentProvider>, input: TextInput, content_type: ContentType) -> Self {
        Self {
            provider,
            input,
            content_type,
        }
    }

    /// Suggestions for the draft
    ///
    /// Suggestions are advisory, so a failing backend yields an empty list
    /// rather than an error.
    pub async fn run(&self) -> CliResult<Vec<String>> {
        let text = self.input.read()?;
        match self
            .provider
            .suggest_continuations(&text, self.content_type)
            .await
        {
            Ok(suggestions) => Ok(suggestions),
            Err(e) => {
                warn!("suggestions unavailable: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

/// Numbered list, or a hint when there is nothing to suggest
pub fn render(style: &OutputStyle, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return style.info("No suggestions yet. Keep writing!");
    }
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| style.numbered_item(i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait::async_trait]
impl Command for SuggestCommand {
    async fn execute(&self) -> CliResult<()> {
        let suggestions = self.run().await?;
        println!("{}", render(&OutputStyle::default(), &suggestions));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&OutputStyle::plain(), &[]),
            "ℹ No suggestions yet. Keep writing!"
        );
    }

    #[test]
    fn test_render_numbered() {
        let text = render(
            &OutputStyle::plain(),
            &["Add a CTA".to_string(), "Cite data".to_string()],
        );
        assert_eq!(text, "  1. Add a CTA\n  2. Cite data");
    }
}
