use serde::Deserialize;
use std::env;

use crate::models::DappMetadata;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub wallet: WalletConfig,
    pub connect: ConnectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted key-value store file.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    /// Network used when the store holds no previous selection.
    pub default_network: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectConfig {
    /// Project identifier handed to the connectivity library.
    pub project_id: String,
    /// Metadata shown to dapps during session establishment.
    pub metadata: DappMetadata,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            storage: StorageConfig {
                path: env::var("WALLET_STORE_PATH")
                    .unwrap_or_else(|_| "wallet-store.json".to_string()),
            },
            wallet: WalletConfig {
                default_network: env::var("WALLET_NETWORK")
                    .unwrap_or_else(|_| "mainnet".to_string()),
            },
            connect: ConnectConfig {
                project_id: env::var("CONNECT_PROJECT_ID")
                    .unwrap_or_else(|_| "3fd234b8e2cd0e1da4bc08a0011bbf64".to_string()),
                metadata: DappMetadata {
                    name: env::var("DAPP_NAME").unwrap_or_else(|_| "Monujo".to_string()),
                    description: env::var("DAPP_DESCRIPTION")
                        .unwrap_or_else(|_| "Monujo Monero Web Wallet".to_string()),
                    url: env::var("DAPP_URL").unwrap_or_else(|_| "monujo.cash/".to_string()),
                    icons: vec![env::var("DAPP_ICON").unwrap_or_else(|_| {
                        "https://monujo.cash/images/favicon.ico".to_string()
                    })],
                },
            },
        })
    }
}
