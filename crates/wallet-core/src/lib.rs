pub mod router;
pub mod servers;
pub mod settings;
pub mod state;
pub mod storage;
pub mod units;
pub mod xjson;

pub use router::{resolve_route, Route};
pub use servers::{resolve_server, set_server_override};
pub use settings::{DisplayUnit, Settings};
pub use state::WalletState;
pub use storage::LocalStore;
pub use units::{convert, convert_labels, Unit, PICONERO_PER_XMR};
pub use xjson::{parse, stringify, XValue};
