mod commands;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    Cli::parse().run()
}
