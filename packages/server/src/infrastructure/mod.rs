//! Infrastructure layer: concrete implementations of the domain interfaces.

pub mod comment;
pub mod dto;
pub mod message_pusher;
pub mod registry;
pub mod repository;
