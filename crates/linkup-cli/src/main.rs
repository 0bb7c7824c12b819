use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

use config::Config;
use linkup_provider::{LlmProvider, OpenRouterProvider, StubProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
use linkup_server::state::AppState;
use linkup_store::{BlurbStore, EventRepository, KvStore, TranscriptLog};

#[derive(Parser)]
#[command(name = "linkup", version, about = "event contact capture backend")]
struct Cli {
    #[arg(long, default_value = "linkup.yaml", help = "Config file path")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Serve {
        #[arg(long, help = "Listen port (overrides config)")]
        port: Option<u16>,
        #[arg(long, help = "Data directory (overrides config)")]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Serve { port, data_dir } => {
            let data_dir = data_dir
                .or(config.data_dir)
                .unwrap_or_else(|| PathBuf::from("data"));
            let port = port.or(config.port).unwrap_or(3001);

            // The environment wins over the config file for the key, same
            // as the original deployment.
            let api_key = std::env::var("OPENROUTER_API_KEY")
                .ok()
                .or(config.provider.api_key);
            let base_url = config
                .provider
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let model = config
                .provider
                .model
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());

            let provider: Arc<dyn LlmProvider> = match api_key {
                Some(key) => Arc::new(OpenRouterProvider::new(key, base_url)),
                None => {
                    warn!("no OpenRouter API key configured, chat uses the offline stub provider");
                    Arc::new(StubProvider)
                }
            };

            let kv = KvStore::open(&data_dir)?;
            info!(data_dir = %data_dir.display(), %model, "opening stores");
            let state = AppState {
                repo: Arc::new(Mutex::new(EventRepository::open(kv.clone()))),
                transcripts: Arc::new(TranscriptLog::new(kv.clone())),
                blurbs: Arc::new(BlurbStore::new(kv)),
                provider,
                model,
            };
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            linkup_server::serve(state, addr).await
        }
    }
}
