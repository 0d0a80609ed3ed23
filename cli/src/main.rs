mod cli;
mod seed;

use std::sync::Arc;

use clap::Parser;

use cli::Cli;
use exec::pool::ExecutionContext;
use query::dao::DataAccess;
use query::orchestrator::Orchestrator;
use query::report::{ConsoleReporter, Reporter};
use query::types::Credentials;
use seed::SeedData;
use store::backend::sqlite_store::SqliteShopStore;
use store::backend::ShopStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    common::logger::init_logger("shop-stats");

    let store = Arc::new(SqliteShopStore::connect(&cli.database_url).await?);
    let seed = match &cli.seed_file {
        Some(path) => SeedData::from_file(path)?,
        None => SeedData::demo(),
    };
    seed.apply(&store).await?;

    let exec = Arc::new(ExecutionContext::with_available_parallelism());
    let dao = DataAccess::new(store, Arc::clone(&exec));
    let orchestrator = Orchestrator::new(dao, Arc::new(ConsoleReporter));

    match (cli.username, cli.password) {
        (Some(username), Some(password)) => {
            run(&orchestrator, Credentials::new(username, password)).await;
        }
        _ => {
            // The canonical demo trio: a good login, a wrong password, and a
            // mis-cased username that is intentionally not found.
            run(&orchestrator, Credentials::new("lisa", "password")).await;
            run(&orchestrator, Credentials::new("lisa", "bad_password")).await;
            run(&orchestrator, Credentials::new("LISA", "password")).await;
        }
    }

    // Every run promise has resolved by now, so no submissions can race this.
    exec.shutdown().await;
    Ok(())
}

async fn run<S, R>(orchestrator: &Orchestrator<S, R>, credentials: Credentials)
where
    S: ShopStore + 'static,
    R: Reporter + 'static,
{
    println!(
        "--- calculating eCommerce statistics of user \"{}\" ...",
        credentials.username
    );
    // Failures are reported by the terminal handler; the demo carries on.
    let _ = orchestrator.run_statistics(credentials).await;
}
