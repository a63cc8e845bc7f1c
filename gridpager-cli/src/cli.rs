use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridpager::PageSize;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Pager configuration file. Defaults to `$XDG_CONFIG_HOME/gridpager/config.ron`, then
    /// `$HOME/.config/gridpager/config.ron`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Override the number of pages. Defaults to the value in the config file.
    #[arg(long)]
    pub page_count: Option<usize>,
    /// Override the total number of rows. Defaults to the value in the config file.
    #[arg(long)]
    pub total_count: Option<usize>,
    /// Write detailed logs to a file in the temporary directory instead of stderr.
    #[arg(long, default_value = "false")]
    pub log_file: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Prints the default config. Can be used to bootstrap your config file.
    Config,
    /// Prints the derived pager state as JSON.
    State,
    /// Renders the pager content line as plain text.
    Render {
        /// Width of the line in cells
        #[arg(short, long, default_value = "80")]
        width: u16,
        /// Ignore display options from the config and render the default view
        #[arg(long, default_value = "false")]
        plain: bool,
    },
    /// Changes the current page and prints the resulting event and state.
    SetPage {
        /// Zero based page index
        page_index: usize,
    },
    /// Changes the page size and prints the resulting event and state.
    SetPageSize {
        /// Number of rows per page or "all"
        page_size: PageSize,
    },
}
