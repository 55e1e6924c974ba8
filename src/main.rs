use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use karaoke_gateway::api::{ApiServer, ApiState};
use karaoke_gateway::{AudioStore, Config, InworldClient};

/// Karaoke - narrated karaoke demo gateway
#[derive(Parser)]
#[command(name = "karaoke", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Static web root; generated audio is saved under `<dir>/audio`
    #[arg(long, env = "KARAOKE_STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,karaoke_gateway=info",
        1 => "info,karaoke_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.port, cli.static_dir)?;

    tracing::info!(
        port = config.port,
        static_dir = %config.static_dir.display(),
        "starting karaoke gateway"
    );

    let inworld = Arc::new(InworldClient::new(
        &config.api_key,
        &config.jwt_key,
        &config.jwt_secret,
    ));
    let audio_store = AudioStore::new(config.audio_dir())?;

    let state = Arc::new(ApiState {
        inworld: Some(inworld),
        audio_store,
        default_voice: karaoke_gateway::DEFAULT_VOICE.to_string(),
    });

    ApiServer::new(state, config.port)
        .static_dir(Some(config.static_dir.clone()))
        .run()
        .await?;

    Ok(())
}
