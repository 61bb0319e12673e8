//! Utilities shared by the Touchline server library and its binaries.

pub mod logger;
pub mod time;
