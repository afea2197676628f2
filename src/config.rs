//! Runtime configuration for the keyspace directory.

use clap::{Parser, Subcommand};

use crate::crypto::Network;

/// Browse every secp256k1 private key, one page at a time
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Network whose version bytes are used: mainnet or testnet
    #[arg(short = 'n', long, default_value = "mainnet", global = true)]
    pub network: Network,

    /// Number of derivation threads (default: number of CPU cores)
    #[arg(short = 't', long, global = true)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one page of keys
    Page {
        /// Page number (base 10, any size; sign is ignored)
        #[arg(default_value = "1", allow_hyphen_values = true)]
        page: String,
    },
    /// Find the page listing a WIF private key
    Lookup {
        /// Private key in Wallet Import Format
        private_key: String,
    },
    /// Print the keyspace dimensions
    Info,
}

impl Config {
    /// Returns the number of derivation threads, defaulting to CPU count
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreads(
                "Thread count must be at least 1".into(),
            ));
        }

        if let Command::Lookup { private_key } = &self.command {
            if private_key.trim().is_empty() {
                return Err(ConfigError::InvalidKey("Private key cannot be empty".into()));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid thread count: {0}")]
    InvalidThreads(String),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),
}
