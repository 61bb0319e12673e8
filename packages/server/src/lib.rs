//! Live sync relay and tactical analysis server for a shared tactical board.
//!
//! Browser clients connect over WebSocket and see each other's marker moves and
//! freehand strokes in near-real time; finalized strokes are kept in a bounded
//! history that is replayed to late joiners.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
