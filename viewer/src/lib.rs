//! Terminal front-end for the demo posts API.
//!
//! Hosts the I/O-free `posts-core` client: `transport` performs the HTTP
//! round-trips, `session` keeps the rendered list and reacts to commands,
//! and `config` holds the CLI surface and logging setup.

pub mod command;
pub mod config;
pub mod session;
pub mod transport;

pub use command::Command;
pub use config::{Cli, LogFormat};
pub use session::Session;
pub use transport::{Transport, UreqTransport};
