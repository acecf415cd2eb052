use anyhow::Context;
use catfact::args::Cli;
use catfact::config::ENV_MODE_VAR;
use catfact::fact::FactClient;
use catfact::logging::{init_tracing, LogTarget};
use catfact::ui;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_mode = std::env::var(ENV_MODE_VAR).ok();
    let config = cli.load_config(env_mode.as_deref())?;

    let target = if cli.once {
        LogTarget::Stderr
    } else {
        LogTarget::from_config(&config.logging)
    };
    init_tracing(&config.logging, target)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = FactClient::from_config(&config)?;
    tracing::info!(url = client.url(), mock = config.mock.enabled, "Starting catfact");

    if cli.once {
        let fact = runtime.block_on(client.fetch_fact())?;
        println!("{}", fact);
        return Ok(());
    }

    ui::runtime::run(client, runtime.handle().clone()).context("terminal UI failed")?;
    Ok(())
}
