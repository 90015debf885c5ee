//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use prlink::output::OutputMode;

/// prlink - Link issue-tracker keys found in pull requests
#[derive(Parser, Debug)]
#[command(
    name = "prlink",
    version,
    about = "Link issue-tracker keys found in pull requests",
    long_about = "Scan a pull request title or branch for issue keys like PROJ-123.\n\n\
                  Found keys are posted as one message linking to the issue tracker;\n\
                  otherwise a warning asks the author to add one."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a pull request for issue keys
    Check(CheckArgs),

    /// Write a starter .prlink.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Project key (repeatable)
        #[arg(short = 'k', long = "key")]
        keys: Vec<String>,

        /// Issue tracker base URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Show version
    Version,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Settings file (default: nearest .prlink.toml, then ~/.prlink/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project key (repeatable; replaces keys from the settings file)
    #[arg(short = 'k', long = "key")]
    pub keys: Vec<String>,

    /// Issue tracker base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Field to scan: title, branch
    #[arg(short, long)]
    pub location: Option<String>,

    /// Emoji placed before the links
    #[arg(long)]
    pub emoji: Option<String>,

    /// Render links as Markdown instead of HTML
    #[arg(long)]
    pub markdown: bool,

    /// Pull request title
    #[arg(long)]
    pub title: Option<String>,

    /// Pull request head branch
    #[arg(long)]
    pub branch: Option<String>,

    /// GitHub event payload (default: $GITHUB_EVENT_PATH)
    #[arg(long, conflicts_with_all = ["title", "branch"])]
    pub event: Option<PathBuf>,

    /// Read branch and HEAD commit summary from the local checkout
    #[arg(long, conflicts_with_all = ["title", "branch", "event"])]
    pub local: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check(args)) => commands::check(&args, output_mode),
        Some(Command::Init { force, keys, url }) => {
            commands::init(force, &keys, url.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": prlink::VERSION
                    })
                );
            } else {
                println!("prlink v{}", prlink::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": prlink::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("prlink v{}", prlink::VERSION);
                println!("\nRun 'prlink --help' for usage");
                println!("Run 'prlink init' to get started");
            }
            Ok(())
        },
    }
}
