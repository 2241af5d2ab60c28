mod file_token_store;
mod memory_token_store;
mod navigation;
mod session_gate;
mod token_store;

pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;
pub use navigation::{NavLink, Navigation, Navigator};
pub use session_gate::{AUTH_ROUTE, HOME_ROUTE, SessionGate};
pub use token_store::TokenStore;
