//! Command line tool for querying a layer-2 rollup.

use anyhow::Result;
use cli::commands::{balance, fee, providers, status};
use cli::HelperConfig;
use colored::Colorize;
use primitives::Outcome;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "l2-helper", about = "Layer-2 rollup helper")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Network to connect to
    #[structopt(short, long)]
    network: Option<String>,

    /// Token symbol, optionally with decimals (e.g. USDC:6)
    #[structopt(short, long)]
    token: Option<String>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the CLI.
#[derive(Debug, StructOpt)]
enum Command {
    /// Check that both networks can be reached
    #[structopt(name = "providers")]
    Providers,

    /// Quote the fee for an operation
    #[structopt(name = "fee")]
    Fee {
        /// Operation type: withdraw, fast-withdraw, transfer, transfer-to-new
        #[structopt(long)]
        kind: String,

        /// Address the operation is for
        #[structopt(long)]
        address: String,
    },

    /// Get the committed and verified balances of an account
    #[structopt(name = "balance")]
    Balance {
        /// Account address
        #[structopt(long)]
        address: String,
    },

    /// Check whether a transaction has completed
    #[structopt(name = "status")]
    Status {
        /// Transaction hash
        #[structopt(long)]
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => HelperConfig::from_file(path)?,
        None => {
            let path = HelperConfig::default_path();
            if path.exists() {
                HelperConfig::from_file(path)?
            } else {
                HelperConfig::default()
            }
        }
    };

    // Apply overrides
    if let Some(network) = opt.network {
        config.network = network;
    }
    if let Some(token) = opt.token {
        match token.split_once(':') {
            Some((symbol, decimals)) => {
                config.token = symbol.to_string();
                config.decimals = decimals.parse()?;
            }
            None => config.token = token,
        }
    }

    // Run the appropriate command
    match opt.cmd {
        Command::Providers => {
            let status = providers::run(&config).await;
            let show = |ok: bool| if ok { "reachable".green() } else { "unreachable".red() };
            println!("{} {}", "Layer-2 network:".green(), show(status.layer2));
            println!("{} {}", "Base chain:".green(), show(status.base_chain));
        }
        Command::Fee { kind, address } => {
            let quote = fee::run(&config, &kind, &address).await?;
            println!("{} {} {}", "Fee:".green(), quote, config.token);
        }
        Command::Balance { address } => {
            // The report prints itself.
            balance::run(&config, &address).await?;
        }
        Command::Status { hash } => match status::run(&config, &hash).await? {
            Outcome::Completed(receipt) => {
                println!("{} {:?}", "Completed:".green(), receipt);
            }
            Outcome::Indeterminate { tx_hash, reason } => {
                println!("{} {} ({})", "Pending:".yellow(), tx_hash, reason);
            }
        },
    }

    Ok(())
}
