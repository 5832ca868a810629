//! CLI command definitions and dispatch.

pub mod init;
pub mod item;
pub mod serve;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::open_store;
use explorer_service::ItemService;

use crate::output::OutputFormat;

/// Explorer: a virtual file tree backed by a single table
#[derive(Debug, Parser)]
#[command(name = "explorer", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded next to the base file
    #[arg(short, long, env = "EXPLORER_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the items table and root folder if missing
    Init,
    /// List the children of a folder
    Ls(item::LsArgs),
    /// Create a folder
    Mkdir(item::MkdirArgs),
    /// Create a file
    Touch(item::TouchArgs),
    /// Rename and/or move an item
    Mv(item::MvArgs),
    /// Delete an item and everything below it
    Rm(item::RmArgs),
    /// Start the HTTP server
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        tracing::debug!(
            config = %self.config,
            env = %self.env,
            backend = ?config.database.backend,
            "Configuration loaded"
        );

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Init => init::execute(&service(&config).await?).await,
            Commands::Ls(args) => item::ls(&service(&config).await?, args, self.format).await,
            Commands::Mkdir(args) => item::mkdir(&service(&config).await?, args, self.format).await,
            Commands::Touch(args) => item::touch(&service(&config).await?, args, self.format).await,
            Commands::Mv(args) => item::mv(&service(&config).await?, args, self.format).await,
            Commands::Rm(args) => item::rm(&service(&config).await?, args).await,
        }
    }
}

/// Helper: build the item service over the configured store
async fn service(config: &AppConfig) -> Result<ItemService, AppError> {
    let store = open_store(&config.database).await?;
    Ok(ItemService::new(store, config.explorer.clone()))
}

/// Helper: parse an item id argument
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|e| AppError::validation(format!("Invalid item id '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_mkdir() {
        let cli = Cli::try_parse_from(["explorer", "mkdir", "Docs", "--by", "alice"]).unwrap();
        let Commands::Mkdir(args) = cli.command else {
            panic!("expected mkdir");
        };
        assert_eq!(args.name, "Docs");
        assert_eq!(args.by, "alice");
        assert!(args.parent.is_none());
    }

    #[test]
    fn test_parses_ls_with_format() {
        let cli = Cli::try_parse_from(["explorer", "--format", "json", "ls", "--sort", "created_desc"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Ls(args) = cli.command else {
            panic!("expected ls");
        };
        assert_eq!(args.sort, explorer_core::types::SortBy::CreatedDesc);
    }

    #[test]
    fn test_touch_requires_key() {
        assert!(Cli::try_parse_from(["explorer", "touch", "notes", "--by", "alice"]).is_err());
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("nope").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
