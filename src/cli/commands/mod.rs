//! Command implementations.
//!
//! Each command handles one event against a [`CommandContext`] and prints
//! either text or JSON.

pub mod categories;
pub mod comment;
pub mod completions;
pub mod counters;
pub mod delete;
pub mod list;
pub mod open;
pub mod show;
pub mod status;
pub mod submit;
pub mod theme;
pub mod version;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::Duration;
use civic_lib::session::DEFAULT_NOTICE_SECS;
use civic_lib::{ActionOutcome, IssueId, KeyValueStore, Renderer, Session};
use serde::Serialize;

use crate::cli::Cli;
use crate::config::{self, CliOverrides, Config};
use crate::storage;

/// Session over whichever backend the configuration picked.
pub type CliSession = Session<Box<dyn KeyValueStore>>;

/// Everything a command needs: the loaded session and output settings.
pub struct CommandContext {
    pub session: CliSession,
    pub config: Config,
    pub json: bool,
    pub color: bool,
}

impl CommandContext {
    /// Resolve configuration for the current directory and open the store.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the backend cannot be opened.
    pub fn open(cli: &Cli) -> Result<Self> {
        let root = std::env::current_dir().context("cannot determine current directory")?;
        let overrides = CliOverrides {
            data_dir: cli.data_dir.clone(),
            backend: cli.backend,
        };
        let config = config::load(&root, overrides)?;
        let color = !cli.no_color && !cli.json && std::io::stdout().is_terminal();
        Self::with_config(config, cli.json, color)
    }

    /// Open the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be opened.
    pub fn with_config(config: Config, json: bool, color: bool) -> Result<Self> {
        let backend = storage::open_backend(config.backend, &config.data_dir).with_context(|| {
            format!(
                "cannot open {} store in {}",
                config.backend,
                config.data_dir.display()
            )
        })?;
        let ttl = Duration::try_seconds(config.notice_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_NOTICE_SECS));
        let session = Session::open(backend)
            .with_renderer(Renderer::new(config.map_search_base.clone()))
            .with_notice_ttl(ttl);
        Ok(Self {
            session,
            config,
            json,
            color,
        })
    }
}

/// Print a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Explain a no-op on stderr; absence is not an error.
pub fn report_ignored(ctx: &CommandContext, id: IssueId, reason: &str) {
    if ctx.session.store().get(id).is_none() {
        eprintln!("No issue with ID {id}; nothing changed.");
    } else {
        eprintln!("{reason}");
    }
}

/// Print an action outcome as JSON, or run `text` for text mode.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn emit_outcome<F>(ctx: &CommandContext, outcome: &ActionOutcome, text: F) -> Result<()>
where
    F: FnOnce(&ActionOutcome),
{
    if ctx.json {
        print_json(outcome)
    } else {
        text(outcome);
        Ok(())
    }
}
