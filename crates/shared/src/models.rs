use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One balance snapshot expressed in all three denominations.
///
/// All three fields describe the same quantity at the same instant; no
/// field is independently authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub xmr: Decimal,
    pub piconero: u64,
    pub usd: Decimal,
}

/// Monero network the wallet operates against.
///
/// The selection is persisted across sessions and drives both the default
/// RPC server and the block-explorer URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Block-explorer base URL for this network.
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://xmrchain.net",
            Network::Testnet => "https://testnet.xmrchain.net",
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(Error::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity a dapp (or this wallet) presents during session establishment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DappMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

/// A dapp's request to build (and optionally broadcast) a transaction.
///
/// The transaction body is an opaque partial transaction config; it is
/// forwarded to the wallet library untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub transaction: serde_json::Value,
    pub broadcast: bool,
    #[serde(rename = "userPrompt")]
    pub user_prompt: String,
}

/// A dapp's request to sign an arbitrary message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRequest {
    pub message: String,
    #[serde(rename = "userPrompt")]
    pub user_prompt: String,
}
