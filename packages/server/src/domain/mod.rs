//! Domain layer: value objects, entities and the interfaces the use cases depend on.

pub mod analysis;
pub mod entity;
pub mod error;
pub mod event;
pub mod history;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use analysis::{
    CommentError, CommentGenerator, PitchSnapshot, TacticalAnalysis, TacticalReading,
};
#[cfg(test)]
pub use analysis::MockCommentGenerator;
pub use entity::{StrokeRecord, StrokeSegment};
pub use error::{DomainError, MessagePushError};
pub use event::{ClientEvent, MovementKind, ServerEvent};
pub use history::{DEFAULT_HISTORY_CAPACITY, StrokeHistory};
pub use message_pusher::MessagePusher;
pub use registry::{ConnectionRegistry, PusherChannel};
pub use repository::StrokeHistoryRepository;
pub use value_object::{
    ConnectionId, ConnectionIdFactory, MAX_PATH_POINTS, MAX_SEGMENT_POINTS, MIN_PATH_POINTS,
    MovementPayload, Point, SegmentPoints, StrokeColor, StrokePath, Timestamp,
};
