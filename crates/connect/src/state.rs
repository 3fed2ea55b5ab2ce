use shared::config::ConnectConfig;
use shared::Result;
use std::collections::HashMap;
use tracing::info;

use crate::client::ConnectClient;
use crate::session::Session;

/// Holds the connectivity client and the session set it reported.
///
/// Empty until [`SessionState::init`] completes; the session snapshot is
/// only meaningful afterwards. Calling `init` again replaces both fields
/// (last write wins); that is an overwrite, not a supported contract.
#[derive(Debug)]
pub struct SessionState<C> {
    pub client: Option<C>,
    pub active_sessions: Option<HashMap<String, Session>>,
}

impl<C> Default for SessionState<C> {
    fn default() -> Self {
        Self {
            client: None,
            active_sessions: None,
        }
    }
}

impl<C: ConnectClient> SessionState<C> {
    pub fn new() -> Self {
        Self {
            client: None,
            active_sessions: None,
        }
    }

    /// Construct the connectivity client and snapshot its active sessions.
    ///
    /// One awaited external call, no retry or timeout here: a failure comes
    /// back as `Err` and the caller decides whether to try again.
    pub async fn init(&mut self, config: ConnectConfig) -> Result<()> {
        let client = C::init(config).await?;
        let sessions = client.active_sessions();
        info!("Connect client initialized with {} active sessions", sessions.len());

        self.active_sessions = Some(sessions);
        self.client = Some(client);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }

    /// Look up one active session by topic. `None` before init completes
    /// or when the topic is unknown.
    pub fn session(&self, topic: &str) -> Option<&Session> {
        self.active_sessions.as_ref()?.get(topic)
    }
}
