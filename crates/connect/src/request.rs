use serde::{Deserialize, Serialize};
use shared::models::{SignatureRequest, TransactionRequest};
use shared::{Error, Result};

/// Wallet actions a dapp may ask for over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMethod {
    SignTransaction,
    SignMessage,
}

impl RequestMethod {
    pub fn from_wire(method: &str) -> Result<Self> {
        match method {
            "xmr_signTransaction" => Ok(RequestMethod::SignTransaction),
            "xmr_signMessage" => Ok(RequestMethod::SignMessage),
            other => Err(Error::InvalidRequest(format!(
                "unsupported method: {}",
                other
            ))),
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            RequestMethod::SignTransaction => "xmr_signTransaction",
            RequestMethod::SignMessage => "xmr_signMessage",
        }
    }
}

/// An inbound dapp request awaiting user approval.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub id: u64,
    pub topic: String,
    pub chain_id: String,
    pub method: RequestMethod,
    pub params: serde_json::Value,
}

impl SessionRequest {
    pub fn new(
        id: u64,
        topic: &str,
        chain_id: &str,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Self> {
        Ok(Self {
            id,
            topic: topic.to_string(),
            chain_id: chain_id.to_string(),
            method: RequestMethod::from_wire(method)?,
            params,
        })
    }

    /// Extract the transaction payload of a sign-transaction request.
    pub fn transaction_request(&self) -> Result<TransactionRequest> {
        if self.method != RequestMethod::SignTransaction {
            return Err(Error::InvalidRequest(format!(
                "{} carries no transaction",
                self.method.as_wire()
            )));
        }
        serde_json::from_value(self.params.clone())
            .map_err(|e| Error::InvalidRequest(format!("malformed transaction params: {}", e)))
    }

    /// Extract the message payload of a sign-message request.
    pub fn signature_request(&self) -> Result<SignatureRequest> {
        if self.method != RequestMethod::SignMessage {
            return Err(Error::InvalidRequest(format!(
                "{} carries no message",
                self.method.as_wire()
            )));
        }
        serde_json::from_value(self.params.clone())
            .map_err(|e| Error::InvalidRequest(format!("malformed signature params: {}", e)))
    }
}
