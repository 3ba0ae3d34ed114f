// Command handlers for the afro CLI

pub mod generate;
pub mod improve;
pub mod metrics;
pub mod seo;
pub mod status;
pub mod suggest;

pub use generate::GenerateCommand;
pub use improve::ImproveCommand;
pub use metrics::MetricsCommand;
pub use seo::SeoCommand;
pub use status::StatusCommand;
pub use suggest::SuggestCommand;

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Where a command reads its draft from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Inline(String),
    File(PathBuf),
}

impl TextInput {
    /// Pick the source from `--text` / `--file`; exactly one must be given
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> CliResult<Self> {
        match (text, file) {
            (Some(text), None) => Ok(TextInput::Inline(text)),
            (None, Some(file)) => Ok(TextInput::File(file)),
            (Some(_), Some(_)) => Err(CliError::InvalidArgument {
                message: "use either --text or --file, not both".to_string(),
            }),
            (None, None) => Err(CliError::InvalidArgument {
                message: "provide the draft with --text or --file".to_string(),
            }),
        }
    }

    /// Read the draft
    pub fn read(&self) -> CliResult<String> {
        match self {
            TextInput::Inline(text) => Ok(text.clone()),
            TextInput::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_is_returned_as_is() {
        let input = TextInput::from_args(Some("hello".to_string()), None).unwrap();
        assert_eq!(input.read().unwrap(), "hello");
    }

    #[test]
    fn test_exactly_one_source_required() {
        assert!(TextInput::from_args(None, None).is_err());
        assert!(TextInput::from_args(Some("a".to_string()), Some(PathBuf::from("b"))).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let input = TextInput::from_args(None, Some(PathBuf::from("/no/such/draft.md"))).unwrap();
        assert!(matches!(input.read(), Err(CliError::Io(_))));
    }
}
