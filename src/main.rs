use std::io;

use anyhow::Context;
use coinflip::{Outcome, Session};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // RUST_LOG may come from a .env file, but one is not required
    dotenv::dotenv().ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to start the logger")?;

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    match session.run().context("coin flip session failed")? {
        Outcome::Exited => info!("player left the game"),
        Outcome::EndOfInput => info!("input closed without exit"),
    }

    Ok(())
}
