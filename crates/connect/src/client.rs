use async_trait::async_trait;
use shared::config::ConnectConfig;
use shared::Result;
use std::collections::HashMap;

use crate::session::Session;

/// Boundary to the external connectivity library.
///
/// The real binding lives outside this repository; this crate only needs
/// the one construction call and a snapshot of the sessions the library
/// currently manages.
#[async_trait]
pub trait ConnectClient: Send + Sync + Sized {
    /// Construct the client with the project id and dapp metadata.
    /// Failures are returned to the caller, which owns any retry policy.
    async fn init(config: ConnectConfig) -> Result<Self>;

    /// Sessions the library currently holds, keyed by topic.
    fn active_sessions(&self) -> HashMap<String, Session>;
}
