//! glsr: command-line front end for the Gliesereum wallet engine.
//!
//! Every subcommand prints one JSON document on stdout; logs go to stderr.

use anyhow::Context;
use clap::Parser;
use gliesereum_types::{DerivationScheme, Signature};
use gliesereum_utils::LogFormat;
use gliesereum_wallet_core::{Gliesereum, WalletConfig, WalletEngine};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glsr", about = "Gliesereum wallet tool", version)]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "GLSR_CONFIG")]
    config: Option<PathBuf>,

    /// Derivation scheme: "standard" or "legacy".
    #[arg(long, env = "GLSR_SCHEME")]
    scheme: Option<DerivationScheme>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GLSR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GLSR_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a new random wallet. The output contains the private key.
    Create,

    /// Rebuild a wallet from a hex private key.
    Import {
        /// Private key, 1 to 64 hex digits.
        private_key: String,
    },

    /// Check an address checksum. Prints {"valid": bool}; exits 0 either way.
    Validate { address: String },

    /// Sign data with a hex private key.
    Sign {
        data: String,

        #[arg(long, env = "GLSR_PRIVATE_KEY", hide_env_values = true)]
        key: String,
    },

    /// Verify a signature against a hex public key.
    Verify {
        data: String,

        /// Signature JSON: {"r": hex, "s": hex, "recovery_param": n}.
        #[arg(long)]
        signature: String,

        #[arg(long)]
        public_key: String,
    },

    /// Recover the signer's public key. Prints "invalid" on failure.
    Recover {
        data: String,

        /// Signature JSON: {"r": hex, "s": hex, "recovery_param": n}.
        #[arg(long)]
        signature: String,
    },

    /// Derive the 16-digit card number for an address.
    Number { address: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WalletConfig::default(),
    };
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let log_format = match cli.log_format {
        Some(format) => format,
        None => config
            .log_format
            .parse()
            .map_err(anyhow::Error::msg)
            .context("invalid log_format in config")?,
    };
    gliesereum_utils::init_logging(log_format, &config.log_level);

    if let Some(ref path) = cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    let engine = Gliesereum::from_config(&config);
    let output = run(&engine, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(engine: &impl WalletEngine, command: Command) -> anyhow::Result<serde_json::Value> {
    let output = match command {
        Command::Create => serde_json::to_value(engine.generate().export())?,
        Command::Import { private_key } => {
            let wallet = engine
                .import_from_private_key(&private_key)
                .context("importing private key")?;
            serde_json::to_value(wallet.export())?
        }
        Command::Validate { address } => {
            let valid = engine.validate_address(&address);
            json!({ "address": address, "valid": valid })
        }
        Command::Sign { data, key } => {
            let signature = engine.sign(&data, &key).context("signing")?;
            serde_json::to_value(signature)?
        }
        Command::Verify {
            data,
            signature,
            public_key,
        } => {
            let signature = parse_signature(&signature)?;
            let valid = engine
                .verify(&data, &signature, &public_key)
                .context("verifying")?;
            json!({ "valid": valid })
        }
        Command::Recover { data, signature } => {
            let signature = parse_signature(&signature)?;
            let public_key = engine
                .recover(&data, &signature)
                .map(|key| key.to_hex())
                .unwrap_or_else(|| "invalid".to_string());
            json!({ "public_key": public_key })
        }
        Command::Number { address } => {
            let number = engine.card_number(&address);
            json!({ "address": address, "number": number.get() })
        }
    };
    Ok(output)
}

fn parse_signature(raw: &str) -> anyhow::Result<Signature> {
    serde_json::from_str(raw).context("signature must be JSON {\"r\", \"s\", \"recovery_param\"}")
}
