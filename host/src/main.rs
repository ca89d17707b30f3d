//! This file starts the command line host replaying a page fixture against the form dispatcher.

use std::{io::stdout, path::PathBuf};

use clap::Parser;
use color_eyre::{config::HookBuilder, Result};
use host::{init_tracing, replay, write_catalog};
use page::Page;
use tracing::info;

/// Replays a CRM page fixture against the form dispatcher, printing every notification.
#[derive(Parser)]
#[command(name = "crm-forms", version, about)]
struct Args {
    /// The page fixture to replay, the built-in CRM page if omitted.
    page: Option<PathBuf>,

    /// Lists the form actions instead of replaying a page.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    HookBuilder::new().display_env_section(false).install()?;
    init_tracing("warn");

    let args = Args::parse();

    if args.list {
        write_catalog(&mut stdout().lock())?;
        return Ok(());
    }

    let page = match &args.page {
        Some(path) => Page::try_from_path(path)?,
        None => Page::default(),
    };

    let replay = replay(&page, |message: &str| println!("{message}"))?;
    info!(
        notifications = replay.notifications,
        uncaught = replay.uncaught,
        "replayed {}",
        page.title
    );

    Ok(())
}
