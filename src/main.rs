use clap::Parser;
use dotsnap::config::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Running without a subcommand performs a backup
    match cli.command {
        Some(Command::Restore) => dotsnap::commands::restore::run(cli.home)?,
        Some(Command::Backup) | None => dotsnap::commands::backup::run(cli.home)?,
    }

    Ok(())
}
