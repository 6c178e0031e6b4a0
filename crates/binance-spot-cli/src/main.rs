/*
[INPUT]:  CLI arguments, environment credentials, optional YAML configuration file
[OUTPUT]: Query result on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use binance_spot_cli::{CliConfig, Command, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "binance-spot", version, about = "Binance Spot REST query tool")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,
    #[arg(long, env = "BINANCE_BASE_URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(args.api_key, args.api_secret, args.base_url);
    debug!(?config, "configuration resolved");

    if args.command.requires_credentials() && !config.has_credentials() {
        bail!(
            "`{}` needs an API key and secret (use --api-key/--api-secret, \
             BINANCE_API_KEY/BINANCE_API_SECRET or the config file)",
            args.command.name()
        );
    }

    let client = config.build_client()?;
    info!(command = args.command.name(), base_url = %client.base_url(), "running query");

    let rendered = args.command.run(&client, args.format)?;
    print!("{rendered}");
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

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).with_context(|| format!("load config {path_str}"))
}
