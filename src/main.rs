mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use inventory_tracker::InventoryError;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_tracker=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_operator_error() => {
            eprintln!("Warning: {}", err);
            Ok(ExitCode::from(2))
        }
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("inventory database {}", cli.db.display())))
        }
    }
}

fn run(cli: &Cli) -> Result<(), InventoryError> {
    match &cli.command {
        Commands::Init => cli::init_database(&cli.db),
        Commands::Add {
            name,
            quantity,
            price,
        } => cli::add_product(&cli.db, name, *quantity, *price),
        Commands::Edit {
            id,
            name,
            quantity,
            price,
        } => cli::edit_product(&cli.db, *id, name.clone(), *quantity, *price),
        Commands::Delete { id } => cli::delete_product(&cli.db, *id),
        Commands::Show { id, format } => cli::show_product(&cli.db, *id, format),
        Commands::List { format } => cli::list_products(&cli.db, format),
        Commands::Report { threshold, format } => {
            cli::low_stock_report(&cli.db, *threshold, format)
        }
        Commands::Interactive => cli::interactive(&cli.db),
    }
}
