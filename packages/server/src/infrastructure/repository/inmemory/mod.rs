//! InMemory Repository 実装

mod stroke_history;

pub use stroke_history::InMemoryStrokeHistoryRepository;
