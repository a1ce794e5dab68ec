use anyhow::Result;
use clap::Parser;
use pie_items::cli::{self, Cli};
use pie_items::ItemRegistry;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    log::debug!("Running command: {:?}", cli.command);

    let output = cli::run(cli, ItemRegistry::shared())?;
    print!("{}", output);
    Ok(())
}
