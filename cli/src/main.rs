//! nem-validate: check NEM sign requests before they reach a signer.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nem_cli::{check_address, check_request_json, read_request, CliConfig, OutputFormat};
use nem_crypto::NemAddressCodec;
use nem_types::NetworkId;
use nem_utils::LogFormat;

/// Exit status for a request or address that was refused.
const EXIT_REJECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "nem-validate", about = "Validate NEM sign requests before signing")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "NEM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "NEM_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "NEM_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    /// Report format: "text" or "json".
    #[arg(long, env = "NEM_OUTPUT", global = true)]
    output: Option<OutputFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Validate a JSON sign request read from FILE, or stdin for "-".
    Check {
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,
    },
    /// Verify the checksum of a base32 address.
    Address {
        address: String,

        /// Network the address must belong to: "mainnet", "testnet" or "mijin".
        #[arg(long, default_value = "mainnet")]
        network: NetworkId,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };
    let config = file_config.with_overrides(cli.log_level, cli.log_format, cli.output);

    nem_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let accepted = match cli.command {
        Command::Check { input } => {
            let json = read_request(&input, config.max_request_bytes)?;
            tracing::debug!(input = %input, bytes = json.len(), "read sign request");
            let report = check_request_json(&json, &NemAddressCodec)?;
            println!("{}", report.render(config.output)?);
            report.is_accepted()
        }
        Command::Address { address, network } => {
            let report = check_address(&address, network);
            println!("{}", report.render(config.output)?);
            report.valid
        }
    };

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    })
}
