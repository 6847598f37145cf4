/*
[INPUT]:  CLI arguments, optional YAML configuration file, P2PB2B_* env vars
[OUTPUT]: JSON response of one REST operation on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use p2pb2b_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "p2pb2b", version, about = "P2PB2B exchange REST client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit without sending a request
    #[arg(long = "dry-run")]
    dry_run: bool,
    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    let endpoint = args.command.endpoint();
    info!(
        endpoint = %endpoint,
        base_url = %config.base_url,
        signed = endpoint.requires_auth(),
        "configuration loaded"
    );

    let client = config.build_client(args.command.requires_auth())?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let response = args
        .command
        .run(&client)
        .await
        .with_context(|| format!("{endpoint} request failed"))?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            CliConfig::from_file(path_str)
                .with_context(|| format!("load config from {}", path.display()))?
        }
        None => CliConfig::default(),
    };
    Ok(config.with_env_overrides())
}
