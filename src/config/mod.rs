//! Configuration for the Memorizer server.
//!
//! Settings come from command-line flags, falling back to environment
//! variables (optionally loaded from a `.env` file) and then to defaults.
//!
//! # Example
//!
//! ```
//! use clap::Parser;
//! use memorizer::config::ServerConfig;
//!
//! let config = ServerConfig::try_parse_from(["memorizer", "--port", "9000"]).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

mod database;
mod logging;
mod server;

use clap::Parser;

pub use database::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerRuntimeConfig;

/// Memorizer server configuration
#[derive(Debug, Parser)]
#[command(name = "memorizer", about = "Work shift and song ledger API server", long_about = None)]
pub struct ServerConfig {
    /// Network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
