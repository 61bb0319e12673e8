//! Request handlers.

mod http;
mod websocket;

pub use http::{analyze_tactics, debug_session_state, health_check};
pub use websocket::websocket_handler;
