//! Data Transfer Objects (DTOs) for the tactical board.
//!
//! DTOs are organized by protocol:
//! - `websocket`: live sync message DTOs
//! - `http`: HTTP API request/response DTOs
//!
//! `conversion` holds the mapping to and from domain types, including the
//! shape check every inbound live sync event goes through.

pub mod conversion;
pub mod http;
pub mod websocket;
