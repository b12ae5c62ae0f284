//! Command-line and environment configuration for the viewer.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use posts_core::DEFAULT_BASE_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::command::Command;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Fetch and display posts from the demo REST API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// API base URL; endpoint paths are appended to it.
    #[arg(long, env = "POSTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "POSTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds; must be at least 1.
    #[arg(
        long,
        env = "POSTS_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Render once and exit instead of reading commands from stdin.
    #[arg(long)]
    pub once: bool,

    /// Commands to run after the initial render (refresh, comments, create).
    /// When present, stdin is not read.
    pub commands: Vec<Command>,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn interactive(&self) -> bool {
        !self.once && self.commands.is_empty()
    }
}

/// Logs go to stderr so the rendered list on stdout stays clean.
pub fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("posts_viewer=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
