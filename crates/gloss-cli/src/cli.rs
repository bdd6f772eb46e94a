//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Gloss - learn English vocabulary from news articles.
#[derive(Debug, Parser)]
#[command(name = "gloss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API key for the chat-completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (CSV on stdout)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize an article and annotate its keywords
    Run(RunArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// News article URL
    pub url: String,

    /// Annotation type for every keyword
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Where to write the CSV table ("-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write the CSV table
    #[arg(long, conflicts_with = "output")]
    pub no_export: bool,

    /// Override the chat model
    #[arg(long)]
    pub model: Option<String>,

    /// Annotation calls in flight at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Keep rows whose annotation failed instead of aborting
    #[arg(long)]
    pub keep_failed: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Annotation mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Brief English definition
    Explanation,
    /// Comma-separated synonyms
    Synonym,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for gloss_domain::AnnotationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Explanation => gloss_domain::AnnotationMode::Explanation,
            ModeArg::Synonym => gloss_domain::AnnotationMode::Synonym,
        }
    }
}
