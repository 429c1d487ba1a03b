//! Trolley terminal client
//!
//! Drives the cart controller against a live cart API and renders the cart
//! page as a table.

use std::{io, process::ExitCode};

use clap::Parser;
use thiserror::Error;
use tracing::info;

use trolley::{
    api::CartApiError,
    config::ConfigError,
    controller::CartController,
    session::{Session, bootstrap},
};

use crate::{
    config::{Cli, Command},
    observability::{ObservabilityError, init_subscriber},
    terminal::TerminalView,
};

mod config;
mod observability;
mod terminal;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Already reported through the view.
    #[error("cart request failed")]
    Request(#[from] CartApiError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Request(_)) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    init_subscriber(&cli.logging)?;

    let config = cli.api.client_config()?;
    let session = cli.api.session();

    let api = match session.token() {
        Some(token) => config.api().with_bearer_token(token),
        None => config.api(),
    };

    info!(base_url = %config.base_url, signed_in = session.is_logged_in(), "starting");

    let controller =
        CartController::with_renderer(api, TerminalView::new(io::stdout()), config.renderer());

    match cli.command {
        Command::Show => {
            bootstrap(&controller, &session).await?;
            controller.render_cart_page();
        }
        Command::Add { product_id } => controller.add_to_cart(product_id).await?,
        Command::Set {
            product_id,
            quantity,
        } => controller.update_quantity(product_id, quantity).await?,
        Command::Remove { product_id } => controller.remove_from_cart(product_id).await?,
        Command::Clear => controller.clear_cart().await?,
    }

    Ok(())
}
