// Rewrite a draft following an instruction

use std::sync::Arc;

use afrocreate_providers::ContentProvider;

use super::{Command, TextInput};
use crate::error::CliResult;

/// Improve existing content
pub struct ImproveCommand {
    provider: Arc<dyn ContentProvider>,
    input: TextInput,
    instruction: String,
}

impl ImproveCommand {
    pub fn new(provider: Arc<dyn ContentProvider>, input: TextInput, instruction: String) -> Self {
        Self {
            provider,
            input,
            instruction,
        }
    }

    /// The improved text
    pub async fn run(&self) -> CliResult<String> {
        let content = self.input.read()?;
        Ok(self.provider.improve(&content, &self.instruction).await?)
    }
}

#[async_trait::async_trait]
impl Command for ImproveCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", self.run().await?);
        Ok(())
    }
}
