use std::io;

use anyhow::Context;
use clap::Parser;
use posts_core::PostsClient;
use posts_viewer::config::{init_tracing, Cli};
use posts_viewer::{Session, UreqTransport};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format).context("failed to initialise logging")?;

    let client = PostsClient::new(&cli.base_url);
    tracing::info!(base_url = client.base_url(), "starting posts viewer");

    let mut session = Session::new(client, UreqTransport::new(cli.timeout()));
    let mut stdout = io::stdout().lock();

    if cli.interactive() {
        session.run_interactive(io::stdin().lock(), &mut stdout)?;
    } else {
        session.run_script(&cli.commands, &mut stdout)?;
    }

    Ok(())
}
