//! Command-line interface for `civic_tracker`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::logging;
use crate::storage::BackendKind;
use civic_lib::{Category, IssueId};
use commands::CommandContext;

/// `civic` - report and follow up on local problems.
#[derive(Parser, Debug)]
#[command(name = "civic")]
#[command(
    author,
    version,
    about = "Civic issue tracker: report, filter, and follow up on local problems",
    long_about = None,
    after_help = "State lives in .civic/data under the current directory unless configured otherwise."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the durable store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendKind>,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report a new issue
    Submit(SubmitArgs),

    /// List issues, optionally filtered
    List(ListArgs),

    /// Show one issue card
    Show(IdArg),

    /// Advance an issue's status (New -> In Progress -> Resolved -> New)
    Status(IdArg),

    /// Delete an issue
    Delete(IdArg),

    /// Add a comment to an issue
    Comment(CommentArgs),

    /// Print the map search link for an issue's location
    Map(IdArg),

    /// Print an issue's image reference
    Image(IdArg),

    /// Issue counts by status
    Counters,

    /// Show or change the dark-mode flag
    Theme(ThemeArgs),

    /// List the issue categories
    Categories,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Short summary of the problem
    #[arg(long, default_value = "")]
    pub title: String,

    /// What is wrong
    #[arg(long, default_value = "")]
    pub description: String,

    /// Where it is (free text)
    #[arg(long, default_value = "")]
    pub location: String,

    /// One of the categories listed by `civic categories`
    #[arg(long, default_value = "")]
    pub category: String,

    /// Photo path or reference
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only issues in this category
    #[arg(long, short = 'c')]
    pub category: Option<Category>,

    /// Case-insensitive match on title or location
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Print full cards instead of one line per issue
    #[arg(long, short = 'l')]
    pub long: bool,
}

#[derive(Args, Debug)]
pub struct IdArg {
    /// Issue ID
    #[arg(value_parser = parse_issue_id)]
    pub id: IssueId,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Issue ID
    #[arg(value_parser = parse_issue_id)]
    pub id: IssueId,

    /// Comment text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ThemeArgs {
    /// New setting; omit to print the current one
    #[arg(value_enum)]
    pub mode: Option<ThemeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    On,
    Off,
    Toggle,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

fn parse_issue_id(input: &str) -> std::result::Result<IssueId, String> {
    civic_lib::session::parse_id(input).map_err(|e| e.to_string())
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!(command = cli.command.name(), "starting");

    // Commands that never touch the store.
    match &cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Version => return commands::version::execute(cli.json),
        Commands::Categories => return commands::categories::execute(cli.json),
        _ => {}
    }

    let mut ctx = CommandContext::open(&cli)?;

    match &cli.command {
        Commands::Submit(args) => commands::submit::execute(args, &mut ctx),
        Commands::List(args) => commands::list::execute(args, &mut ctx),
        Commands::Show(args) => commands::show::execute(args.id, &ctx),
        Commands::Status(args) => commands::status::execute(args.id, &mut ctx),
        Commands::Delete(args) => commands::delete::execute(args.id, &mut ctx),
        Commands::Comment(args) => commands::comment::execute(args, &mut ctx),
        Commands::Map(args) => commands::open::execute_map(args.id, &mut ctx),
        Commands::Image(args) => commands::open::execute_image(args.id, &mut ctx),
        Commands::Counters => commands::counters::execute(&ctx),
        Commands::Theme(args) => commands::theme::execute(args, &mut ctx),
        Commands::Completions(_) | Commands::Version | Commands::Categories => Ok(()),
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Submit(_) => "submit",
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Status(_) => "status",
            Self::Delete(_) => "delete",
            Self::Comment(_) => "comment",
            Self::Map(_) => "map",
            Self::Image(_) => "image",
            Self::Counters => "counters",
            Self::Theme(_) => "theme",
            Self::Categories => "categories",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}
