// Command routing and dispatch

use std::path::PathBuf;

use afrocreate_metrics::DEFAULT_KEYWORD_LIMIT;
use afrocreate_providers::{ContentLength, ContentType, GenerationRequest, Tone};
use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::logging::init_logging;

/// AfroCreate - AI-assisted marketing content for African businesses
#[derive(Parser, Debug)]
#[command(name = "afro")]
#[command(bin_name = "afro")]
#[command(about = "Draft, score and optimize marketing content")]
#[command(
    long_about = "AfroCreate: draft blog posts, social posts, ads, emails, headlines and hashtags.\n\nWithout an API key every command runs against the built-in template engine.\n\nQuick Start:\n  • afro generate --topic \"Mobile Money\" --type social\n  • afro metrics --file draft.md\n  • afro status"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: <config dir>/afrocreate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate content for a topic
    #[command(about = "Generate a blog post, social post, ad, email, headlines or hashtags")]
    Generate {
        /// What the content is about
        #[arg(long)]
        topic: String,

        /// blog, social, ad, email, headline or hashtag
        #[arg(long = "type", default_value = "blog", value_name = "TYPE")]
        content_type: ContentType,

        /// professional, casual, friendly, formal, persuasive, inspiring, humorous or regional-informal
        #[arg(long, default_value = "professional")]
        tone: Tone,

        /// short, medium or long
        #[arg(long, default_value = "medium")]
        length: ContentLength,

        /// Keyword to work in (repeatable)
        #[arg(long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// Who the content is for
        #[arg(long)]
        audience: Option<String>,

        /// Extra instructions for the writer
        #[arg(long)]
        instructions: Option<String>,

        /// Skip Nigerian market context
        #[arg(long)]
        no_regional: bool,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,

        /// Also save the body as Markdown in this directory
        #[arg(long, value_name = "DIR")]
        save_dir: Option<PathBuf>,
    },

    /// Improve an existing draft
    #[command(about = "Rewrite a draft following an instruction")]
    Improve {
        /// What to change
        #[arg(long)]
        instruction: String,

        #[arg(long)]
        text: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Suggest continuations
    #[command(about = "Suggest up to three ways to continue a draft")]
    Suggest {
        #[arg(long)]
        text: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(long = "type", default_value = "blog", value_name = "TYPE")]
        content_type: ContentType,
    },

    /// SEO metadata
    #[command(about = "Generate an SEO title, description and keywords")]
    Seo {
        /// Title of the piece
        #[arg(long)]
        title: String,

        #[arg(long)]
        text: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Text metrics
    #[command(about = "Word count, reading time, readability and keywords")]
    Metrics {
        #[arg(long)]
        text: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// How many keywords to list
        #[arg(long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
        keywords: usize,

        #[arg(long)]
        json: bool,
    },

    /// Backend status
    #[command(about = "Show whether the real AI service or the mock is active")]
    Status {
        #[arg(long)]
        json: bool,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        let (config, config_path) = AppContext::load_config(cli.config.clone())?;
        init_logging(&config.logging.level, cli.verbose);
        let context = AppContext::from_config(config, config_path)?;

        Self::execute(cli.command, &context).await
    }

    /// Execute a command against a ready context
    pub async fn execute(command: Commands, context: &AppContext) -> CliResult<()> {
        Self::build(command, context)?.execute().await
    }

    /// Turn parsed arguments into a command handler
    pub fn build(command: Commands, context: &AppContext) -> CliResult<Box<dyn Command>> {
        let provider = context.provider.clone();

        Ok(match command {
            Commands::Generate {
                topic,
                content_type,
                tone,
                length,
                keywords,
                audience,
                instructions,
                no_regional,
                json,
                save_dir,
            } => {
                let mut request = GenerationRequest::new(content_type, topic)
                    .with_tone(tone)
                    .with_length(length)
                    .with_keywords(keywords)
                    .with_regional_context(!no_regional);
                if let Some(audience) = audience {
                    request = request.with_audience(audience);
                }
                if let Some(instructions) = instructions {
                    request = request.with_instructions(instructions);
                }
                Box::new(
                    GenerateCommand::new(provider, request)
                        .with_json(json)
                        .with_save_dir(save_dir),
                )
            }
            Commands::Improve {
                instruction,
                text,
                file,
            } => Box::new(ImproveCommand::new(
                provider,
                TextInput::from_args(text, file)?,
                instruction,
            )),
            Commands::Suggest {
                text,
                file,
                content_type,
            } => Box::new(SuggestCommand::new(
                provider,
                TextInput::from_args(text, file)?,
                content_type,
            )),
            Commands::Seo {
                title,
                text,
                file,
                json,
            } => Box::new(
                SeoCommand::new(provider, TextInput::from_args(text, file)?, title).with_json(json),
            ),
            Commands::Metrics {
                text,
                file,
                keywords,
                json,
            } => Box::new(
                MetricsCommand::new(TextInput::from_args(text, file)?, keywords).with_json(json),
            ),
            Commands::Status { json } => Box::new(
                StatusCommand::new(
                    context.status.clone(),
                    context.config.clone(),
                    context.config_path.clone(),
                )
                .with_json(json),
            ),
        })
    }
}
