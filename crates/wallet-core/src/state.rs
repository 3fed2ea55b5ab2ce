use rust_decimal::Decimal;
use shared::models::{BalanceResponse, Network};
use shared::Result;
use tracing::{info, warn};

use crate::servers::resolve_server;
use crate::storage::{LocalStore, KEY_NETWORK};

/// Live wallet state: the opaque wallet-library handle plus the display
/// fields derived from it.
///
/// `W` is whatever handle the wallet library hands back; this container
/// only stores and forwards it. Constructed once at startup and mutated
/// by the owning page flow; there is no teardown.
#[derive(Debug)]
pub struct WalletState<W> {
    pub wallet: Option<W>,
    pub balance: Option<BalanceResponse>,
    pub unlocked_balance: Option<BalanceResponse>,
    pub wallet_address: Option<String>,
    pub mnemonic: Option<String>,
    pub exchange_rate: Option<Decimal>,
    pub last_block_height: Option<u64>,
    pub sync_status: String,
    network: Network,
    server: Option<String>,
}

impl<W> WalletState<W> {
    /// Seed the state from the store: the persisted network selection
    /// (default mainnet; a corrupt stored value falls back rather than
    /// failing startup) and the resolved server for it.
    pub fn load(store: &mut LocalStore) -> Result<Self> {
        let network = match store.get(KEY_NETWORK) {
            Some(stored) => stored.parse().unwrap_or_else(|_| {
                warn!("Ignoring corrupt stored network {:?}", stored);
                Network::Mainnet
            }),
            None => Network::Mainnet,
        };
        let server = resolve_server(store, network.as_str())?;

        Ok(Self {
            wallet: None,
            balance: None,
            unlocked_balance: None,
            wallet_address: None,
            mnemonic: None,
            exchange_rate: None,
            last_block_height: None,
            sync_status: String::new(),
            network,
            server: Some(server),
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    /// Block-explorer URL for the selected network.
    pub fn explorer_url(&self) -> &'static str {
        self.network.explorer_url()
    }

    /// Switch networks: persist the selection and re-resolve the server.
    pub fn set_network(&mut self, store: &mut LocalStore, network: Network) -> Result<()> {
        store.set(KEY_NETWORK, network.as_str())?;
        self.network = network;
        self.server = Some(resolve_server(store, network.as_str())?);
        info!("Switched to {} via {:?}", network, self.server);
        Ok(())
    }

    /// Record a fresh balance snapshot (total and unlocked).
    pub fn apply_balance(&mut self, balance: BalanceResponse, unlocked: BalanceResponse) {
        self.balance = Some(balance);
        self.unlocked_balance = Some(unlocked);
    }
}
