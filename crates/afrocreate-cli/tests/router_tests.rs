//! Router and command parsing tests

use std::path::PathBuf;

use afrocreate_cli::router::{Cli, Commands};
use afrocreate_providers::{ContentLength, ContentType, Tone};
use clap::Parser;

#[test]
fn test_parse_generate_defaults() {
    let cli = Cli::parse_from(["afro", "generate", "--topic", "Mobile Money"]);
    if let Commands::Generate {
        topic,
        content_type,
        tone,
        length,
        keywords,
        no_regional,
        json,
        ..
    } = cli.command
    {
        assert_eq!(topic, "Mobile Money");
        assert_eq!(content_type, ContentType::Blog);
        assert_eq!(tone, Tone::Professional);
        assert_eq!(length, ContentLength::Medium);
        assert!(keywords.is_empty());
        assert!(!no_regional);
        assert!(!json);
    } else {
        panic!("Expected Generate command");
    }
}

#[test]
fn test_parse_generate_full() {
    let cli = Cli::parse_from([
        "afro",
        "generate",
        "--topic",
        "Ankara",
        "--type",
        "social",
        "--tone",
        "nigerian",
        "--length",
        "short",
        "--keyword",
        "fashion",
        "--keyword",
        "lagos",
        "--audience",
        "young professionals",
        "--no-regional",
        "--json",
    ]);
    if let Commands::Generate {
        content_type,
        tone,
        length,
        keywords,
        audience,
        no_regional,
        json,
        ..
    } = cli.command
    {
        assert_eq!(content_type, ContentType::Social);
        assert_eq!(tone, Tone::RegionalInformal);
        assert_eq!(length, ContentLength::Short);
        assert_eq!(keywords, vec!["fashion", "lagos"]);
        assert_eq!(audience.as_deref(), Some("young professionals"));
        assert!(no_regional);
        assert!(json);
    } else {
        panic!("Expected Generate command");
    }
}

#[test]
fn test_unknown_content_type_is_rejected() {
    let result = Cli::try_parse_from(["afro", "generate", "--topic", "x", "--type", "poem"]);
    assert!(result.is_err());
}

#[test]
fn test_generate_requires_topic() {
    assert!(Cli::try_parse_from(["afro", "generate"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["afro", "status", "-v", "--config", "/tmp/afro.toml"]);
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/afro.toml")));
    assert!(matches!(cli.command, Commands::Status { json: false }));
}

#[test]
fn test_parse_metrics_keyword_limit() {
    let cli = Cli::parse_from(["afro", "metrics", "--text", "hello", "--keywords", "3"]);
    if let Commands::Metrics { text, keywords, .. } = cli.command {
        assert_eq!(text.as_deref(), Some("hello"));
        assert_eq!(keywords, 3);
    } else {
        panic!("Expected Metrics command");
    }
}

#[test]
fn test_metrics_default_keyword_limit() {
    let cli = Cli::parse_from(["afro", "metrics", "--file", "draft.md"]);
    if let Commands::Metrics { keywords, file, .. } = cli.command {
        assert_eq!(keywords, 10);
        assert_eq!(file, Some(PathBuf::from("draft.md")));
    } else {
        panic!("Expected Metrics command");
    }
}

#[test]
fn test_parse_seo_and_improve() {
    let cli = Cli::parse_from(["afro", "seo", "--title", "Cassava", "--text", "body"]);
    assert!(matches!(cli.command, Commands::Seo { .. }));

    let cli = Cli::parse_from(["afro", "improve", "--instruction", "shorter", "--text", "body"]);
    assert!(matches!(cli.command, Commands::Improve { .. }));
}
