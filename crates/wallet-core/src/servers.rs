use shared::models::Network;
use shared::Result;
use tracing::info;

use crate::storage::{server_key, LocalStore};

const MAINNET_DEFAULT: &str = "https://monerod.slvit.us:443";
const TESTNET_DEFAULT: &str = "https://testnet.xmr.ditatompel.com:443";

fn default_server(network: Network) -> &'static str {
    match network {
        Network::Mainnet => MAINNET_DEFAULT,
        Network::Testnet => TESTNET_DEFAULT,
    }
}

/// Resolve the RPC server URL for a network.
///
/// A persisted override (or previously resolved default) wins. Otherwise the
/// built-in default for the network is persisted and returned, so repeated
/// calls are idempotent. An unrecognized network identifier fails without
/// touching the store.
pub fn resolve_server(store: &mut LocalStore, network: &str) -> Result<String> {
    let parsed: Network = network.parse()?;
    let key = server_key(parsed.as_str());

    if let Some(server) = store.get(&key) {
        return Ok(server.to_string());
    }

    let server = default_server(parsed);
    store.set(&key, server)?;
    info!("Resolved default server {} for {}", server, parsed);

    Ok(server.to_string())
}

/// Record a user-chosen server for a network. Takes precedence over the
/// built-in default on every later resolve.
pub fn set_server_override(store: &mut LocalStore, network: Network, url: &str) -> Result<()> {
    store.set(&server_key(network.as_str()), url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Error;

    #[test]
    fn resolve_persists_default_once() {
        let mut store = LocalStore::in_memory();

        let first = resolve_server(&mut store, "mainnet").unwrap();
        assert_eq!(first, MAINNET_DEFAULT);
        assert_eq!(store.get("server-mainnet"), Some(MAINNET_DEFAULT));

        // Idempotent after first call
        let second = resolve_server(&mut store, "mainnet").unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn override_wins_over_default() {
        let mut store = LocalStore::in_memory();
        set_server_override(&mut store, Network::Testnet, "https://my-node.example:18081")
            .unwrap();

        let resolved = resolve_server(&mut store, "testnet").unwrap();
        assert_eq!(resolved, "https://my-node.example:18081");
    }

    #[test]
    fn unknown_network_fails_without_writing() {
        let mut store = LocalStore::in_memory();

        let err = resolve_server(&mut store, "stagenet").unwrap_err();
        assert!(matches!(err, Error::UnknownNetwork(_)));
        assert!(store.is_empty());
    }
}
