use std::path::PathBuf;

use clap::Parser;
use taskboard_common::{
    info,
    settings::{DatabaseArgs, ServerArgs, Settings},
};
use taskboard_server::Server;

use crate::error::TaskboardCliResult;

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help = true)]
pub struct ServerInitArgs {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Parser, Debug, Clone)]
pub enum Subcommand {
    #[command(about = "Start the server")]
    Start(ServerStartArgs),
}

/// Flags left unset fall back to the loaded settings.
#[derive(Parser, Debug, Clone, Default)]
pub struct ServerStartArgs {
    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// The port to run the server on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,
}

impl ServerStartArgs {
    fn resolve(self, config: &Settings) -> (ServerArgs, DatabaseArgs) {
        let server = ServerArgs {
            host: self.host.unwrap_or_else(|| config.server.host.clone()),
            port: self.port.unwrap_or(config.server.port),
        };
        let database = DatabaseArgs {
            path: self.database.unwrap_or_else(|| config.database.path.clone()),
            ..config.database.clone()
        };
        (server, database)
    }
}

pub async fn run(args: ServerInitArgs, config: &Settings) -> TaskboardCliResult<()> {
    match args.subcommand {
        Subcommand::Start(args) => {
            let (server, database) = args.resolve(config);
            start_server(server, database).await?
        }
    }

    Ok(())
}

async fn start_server(args: ServerArgs, database: DatabaseArgs) -> TaskboardCliResult<()> {
    info!("Starting taskboard server on {}", args.bind_address());
    let server = Server::new(args, database);

    server.run().await?;

    Ok(())
}
