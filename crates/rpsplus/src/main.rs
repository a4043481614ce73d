use rpsplus::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), RpsPlusError> {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RefereeConfig::from_env()?;
    tracing::info!(bot = %config.bot, format = ?config.format, "starting referee");

    let mut referee = Referee::from_config(StdioChannel::stdio(), &config);
    if referee.run().await?.is_none() {
        tracing::info!("input closed before the game finished");
    }
    Ok(())
}
