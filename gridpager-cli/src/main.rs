use anyhow::{Context, Result};
use clap::Parser;
use gridpager::GridPager;

use crate::cli::{Args, Command};

mod cli;
mod commands;
mod config_read;
mod logging;

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::init(args.log_file).context("Failed to initialize logger")?;

    let config = if args.command == Command::Config {
        gridpager::ConfigFile::default()
    } else {
        config_read::read_config(args.config.as_deref()).context("Failed to read config")?
    };

    let mut pager = GridPager::new(config.into_props(args.page_count, args.total_count));
    log::debug!(props:? = pager.props; "Pager initialized");

    let output = commands::run(&args.command, &mut pager)?;
    println!("{output}");

    Ok(())
}
