use std::path::PathBuf;

use clap::Parser;
use taskboard_common::{
    info,
    settings::{DatabaseArgs as DatabaseSettings, Settings},
};
use taskboard_database::database::get_app_database;

use crate::error::TaskboardCliResult;

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help = true)]
pub struct DatabaseArgs {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Parser, Debug, Clone)]
pub enum Subcommand {
    #[command(about = "Create the database file and schema without starting the server")]
    Init(DatabaseInitArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct DatabaseInitArgs {
    /// Path of the SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,
}

pub async fn run(args: DatabaseArgs, config: &Settings) -> TaskboardCliResult<()> {
    match args.subcommand {
        Subcommand::Init(args) => {
            let settings = DatabaseSettings {
                path: args.database.unwrap_or_else(|| config.database.path.clone()),
                ..config.database.clone()
            };
            init_database(&settings).await?
        }
    }

    Ok(())
}

async fn init_database(args: &DatabaseSettings) -> TaskboardCliResult<()> {
    let db = get_app_database(args).await?;
    db.close().await;
    info!("Database ready at {}", args.path.display());

    Ok(())
}
