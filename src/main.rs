use anyhow::Context;
use clap::Parser;
use std::io;

use folio::catalog::Catalog;
use folio::cli::{print_catalog, Cli, Command};
use folio::config::Config;
use folio::logging::init_tracing;
use folio::shutdown::ShutdownHandle;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_required(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);

    let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref(), &config.demo)
        .context("Failed to load catalog")?;

    if let Some(Command::List { json }) = cli.command {
        let mut stdout = io::stdout().lock();
        print_catalog(&mut stdout, &catalog, &config.demo, json)?;
        return Ok(());
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "folio starting");

    let shutdown = ShutdownHandle::install().context("Failed to install signal handlers")?;
    folio::ui::run(&config, catalog, shutdown).context("Terminal UI failed")?;
    Ok(())
}
