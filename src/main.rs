use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use authenticon::seed::{self, OutputFormat};
use authenticon::uploader::DirectUploader;
use authenticon::{build_state, config::Config, create_router, utils::init_logger};

#[derive(Parser)]
#[command(name = "authenticon", version, about = "Autograph verification demo service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Generate demo authentication records
    Seed {
        /// Number of records to generate
        #[arg(long, default_value_t = 200)]
        count: usize,
        /// Output file path
        #[arg(long, default_value = "authenticon_seed.json")]
        out: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Deterministic RNG seed (overrides AUTHENTICON_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Upload a file through a signed URL issued by a running server
    Upload {
        file: PathBuf,
        #[arg(long, env = "AUTHENTICON_SERVER", default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    match Cli::parse().command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Seed { count, out, format, seed: rng_seed } => {
            let records = seed::generate_dataset(count, rng_seed)?;
            seed::write_records(&records, &out, format)?;
            println!("Wrote {} records to {} ({}).", records.len(), out.display(), format);
            Ok(())
        }
        Command::Upload { file, server } => {
            let uploader = DirectUploader::new(server);
            match uploader.upload_file(&file).await {
                Ok(outcome) => {
                    println!("Uploaded {} bytes as {} ({}).", outcome.bytes, outcome.key, outcome.content_type);
                    Ok(())
                }
                Err(e) => Err(anyhow::anyhow!("Upload failed: {}", e)),
            }
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    let addr = config.bind_addr();
    let state = build_state(config)?;
    let app = create_router(state);

    // Start server
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
