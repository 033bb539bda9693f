use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use clap::Parser;
use info::InfoArgs;
use taskboard_common::{
    metadata::LevelFilter,
    util::tracing::{level_from_log, setup_tracing},
};

use crate::{error::TaskboardCliResult, init::init_config};

mod database;
mod info;
mod serverinfra;

#[derive(Debug, Parser)]
#[command(name = "tb", version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Log at debug level unless --log-level says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Overrides `log_level` from the settings
    #[clap(short('l'), long, value_name("LEVEL"))]
    pub log_level: Option<LevelFilter>,

    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Parser, Clone)]
pub enum Command {
    #[command(about = "Show information about taskboard")]
    Info(InfoArgs),
    #[command(about = "Run the HTTP server")]
    Server(serverinfra::ServerInitArgs),
    #[command(about = "Manage the database file")]
    Db(database::DatabaseArgs),
}

/// Version details baked in by the binary's build script.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: Option<&'static str>,
    pub git_sha: Option<&'static str>,
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let sha = self.git_sha.unwrap_or("unknown");
        write!(
            f,
            "{} {} ({})",
            self.version,
            self.build_date.unwrap_or("unknown"),
            sha.get(..8).unwrap_or(sha)
        )
    }
}

impl Cli {
    fn tracing_level(&self, configured: log::LevelFilter) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LevelFilter::DEBUG,
            (None, false) => level_from_log(configured),
        }
    }
}

pub async fn exec(build: BuildInfo) -> TaskboardCliResult {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let cfg = match init_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            setup_tracing(cli.log_level).await;
            return Err(e.into());
        }
    };
    setup_tracing(Some(cli.tracing_level(cfg.log_level))).await;

    match cli.cmd {
        Command::Info(args) => info::run(args, cfg, build).await?,
        Command::Server(args) => serverinfra::run(args, cfg).await?,
        Command::Db(args) => database::run(args, cfg).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_start() {
        let cli = Cli::try_parse_from([
            "tb",
            "--log-level",
            "warn",
            "server",
            "start",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LevelFilter::WARN));
        assert!(matches!(cli.cmd, Command::Server(_)));
    }

    #[test]
    fn test_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["tb"]).is_err());
    }

    #[test]
    fn test_tracing_level_precedence() {
        let cli = Cli::try_parse_from(["tb", "-v", "info"]).unwrap();
        assert_eq!(cli.tracing_level(log::LevelFilter::Warn), LevelFilter::DEBUG);

        let cli = Cli::try_parse_from(["tb", "-v", "-l", "error", "info"]).unwrap();
        assert_eq!(cli.tracing_level(log::LevelFilter::Warn), LevelFilter::ERROR);

        let cli = Cli::try_parse_from(["tb", "info"]).unwrap();
        assert_eq!(cli.tracing_level(log::LevelFilter::Warn), LevelFilter::WARN);
    }

    #[test]
    fn test_build_info_display() {
        let build = BuildInfo {
            version: "0.1.0",
            build_date: Some("2025-03-10"),
            git_sha: Some("0123456789abcdef"),
        };
        assert_eq!(build.to_string(), "0.1.0 2025-03-10 (01234567)");

        let build = BuildInfo {
            version: "0.1.0",
            build_date: None,
            git_sha: None,
        };
        assert_eq!(build.to_string(), "0.1.0 unknown (unknown)");
    }
}
