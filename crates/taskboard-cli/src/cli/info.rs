use clap::Parser;
use taskboard_common::settings::Settings;

use crate::{cli::BuildInfo, error::TaskboardCliResult};

#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}

pub async fn run(_args: InfoArgs, config: &Settings, build: BuildInfo) -> TaskboardCliResult<()> {
    println!("taskboard {}", build);
    println!("  server:   http://{}", config.server.bind_address());
    println!("  database: {}", config.database.path.display());
    Ok(())
}
