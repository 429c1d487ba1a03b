//! CLI configuration

use clap::{Args, Parser, Subcommand};

use trolley::{
    config::{ClientConfig, ConfigError},
    products::ProductId,
    render::DEFAULT_IMAGE_BASE_PATH,
    session::StaticSession,
};

/// Trolley cart client
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Trolley cart client", long_about = None)]
pub(crate) struct Cli {
    /// Cart API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the cart page
    Show,

    /// Add one unit of a product
    Add {
        /// Product identifier
        product_id: ProductId,
    },

    /// Set the quantity of a product (0 removes it)
    Set {
        /// Product identifier
        product_id: ProductId,

        /// New quantity
        quantity: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product identifier
        product_id: ProductId,
    },

    /// Remove every product from the cart
    Clear,
}

/// Cart API settings.
#[derive(Debug, Args)]
pub(crate) struct ApiConfig {
    /// Cart API base URL
    #[arg(long, env = "TROLLEY_API_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Bearer token of the signed-in user
    #[arg(long, env = "TROLLEY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory product images are served from
    #[arg(long, env = "TROLLEY_IMAGE_BASE_PATH", default_value = DEFAULT_IMAGE_BASE_PATH)]
    pub image_base_path: String,
}

impl ApiConfig {
    /// Build the shared client configuration.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig {
            base_url: self.base_url.clone(),
            image_base_path: self.image_base_path.clone(),
            ..ClientConfig::default()
        }
        .validated()
    }

    /// Session for the configured token.
    pub fn session(&self) -> StaticSession {
        self.token
            .clone()
            .map_or_else(StaticSession::anonymous, StaticSession::signed_in)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TROLLEY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
