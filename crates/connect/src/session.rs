use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::DappMetadata;

/// One established dapp handshake, keyed by its topic.
///
/// The connectivity library owns the session lifecycle; this is the
/// descriptor it reports back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier assigned by the connectivity library.
    pub topic: String,
    /// Metadata of the dapp on the other end.
    pub peer: DappMetadata,
    pub expiry: Option<DateTime<Utc>>,
}
