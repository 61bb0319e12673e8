//! Events exchanged over the live sync channel.
//!
//! `ClientEvent` is the closed set of validated inbound events; each variant is
//! handled by exactly one use case. `ServerEvent` is what the relay pushes out.

use super::{
    entity::{StrokeRecord, StrokeSegment},
    value_object::{MovementPayload, SegmentPoints, StrokeColor, StrokePath},
};

/// Which marker a movement event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Player,
    Ball,
}

/// A validated event received from one connection.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Movement {
        kind: MovementKind,
        payload: MovementPayload,
    },
    DrawPath {
        path: StrokePath,
        color: StrokeColor,
    },
    DrawPartialPath {
        points: SegmentPoints,
        color: StrokeColor,
        last: bool,
    },
    ClearPaths,
}

impl ClientEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Movement {
                kind: MovementKind::Player,
                ..
            } => "player-move",
            Self::Movement {
                kind: MovementKind::Ball,
                ..
            } => "ball-move",
            Self::DrawPath { .. } => "path_draw",
            Self::DrawPartialPath { .. } => "path_draw_partial",
            Self::ClearPaths => "path_clear",
        }
    }
}

/// An event pushed from the server to one or more connections.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Movement {
        kind: MovementKind,
        payload: MovementPayload,
    },
    PathDrawn(StrokeRecord),
    PartialPathDrawn(StrokeSegment),
    PathsCleared,
    ExistingPaths(Vec<StrokeRecord>),
}

impl ServerEvent {
    /// Number of points carried by the event, for logging.
    pub fn point_count(&self) -> usize {
        match self {
            Self::PathDrawn(record) => record.path.len(),
            Self::PartialPathDrawn(segment) => segment.points.len(),
            Self::ExistingPaths(records) => records.iter().map(|r| r.path.len()).sum(),
            Self::Movement { .. } | Self::PathsCleared => 0,
        }
    }
}

