pub mod client;
pub mod request;
pub mod session;
pub mod state;

pub use client::ConnectClient;
pub use request::{RequestMethod, SessionRequest};
pub use session::Session;
pub use state::SessionState;
