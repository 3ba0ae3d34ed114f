// SEO metadata for a draft

use std::sync::Arc;

use afrocreate_providers::{ContentProvider, SeoMetadata};

use super::{Command, TextInput};
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Produce a search title, description and keywords
pub struct SeoCommand {
    provider: Arc<dyn ContentProvider>,
    input: TextInput,
    title: String,
    json: bool,
}

impl SeoCommand {
    pub fn new(provider: Arc<dyn ContentProvider>, input: TextInput, title: String) -> Self {
        Self {
            provider,
            input,
            title,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub async fn run(&self) -> CliResult<SeoMetadata> {
        let content = self.input.read()?;
        Ok(self
            .provider
            .generate_seo_metadata(&content, &self.title)
            .await?)
    }
}

pub fn render(style: &OutputStyle, seo: &SeoMetadata) -> String {
    [
        style.section("SEO"),
        style.key_value("Title", &seo.seo_title),
        style.key_value("Description", &seo.seo_description),
        style.key_value("Keywords", &seo.keywords.join(", ")),
    ]
    .join("\n")
}

#[async_trait::async_trait]
impl Command for SeoCommand {
    async fn execute(&self) -> CliResult<()> {
        let seo = self.run().await?;
        if self.json {
            let json = serde_json::to_string_pretty(&seo)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", render(&OutputStyle::default(), &seo));
        }
        Ok(())
    }
}
