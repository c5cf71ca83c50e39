pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;

pub use config::{parse_addr, AddrError, ServerConfig};
pub use error::ApiError;
pub use server::{build_router, start, AppState, ServerHandle};
