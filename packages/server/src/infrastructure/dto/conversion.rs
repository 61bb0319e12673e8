//! Conversion logic between DTOs and domain types.
//!
//! Inbound live sync frames go through a single shape check
//! (`TryFrom<IncomingMessage> for ClientEvent`). Anything that fails it is
//! dropped by the caller without being relayed.

use serde_json::Number;
use thiserror::Error;

use crate::domain::{
    ClientEvent, DomainError, MovementKind, MovementPayload, PitchSnapshot, Point,
    SegmentPoints, ServerEvent, StrokeColor, StrokePath, StrokeRecord, StrokeSegment,
    TacticalAnalysis,
};
use crate::infrastructure::dto::{
    http::{AnalyzeRequestDto, AnalyzeResponseDto, StoredPathDto},
    websocket::{
        IncomingMessage, MessageType, OutgoingMessage, PartialPathDto, PathDrawPartialPayload,
        PathDrawPayload, PathDto,
    },
};

/// Why an inbound frame was rejected by the shape check.
#[derive(Debug, Error)]
pub enum EventShapeError {
    #[error("frame is not a valid event envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("'{0:?}' requires a payload")]
    MissingPayload(MessageType),

    #[error("'{event:?}' payload has the wrong shape: {reason}")]
    InvalidPayload { event: MessageType, reason: String },

    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error("'{0:?}' is not accepted from clients")]
    NotAcceptedFromClient(MessageType),
}

/// Parse a text frame and run the shape check for its event type.
pub fn parse_client_event(text: &str) -> Result<ClientEvent, EventShapeError> {
    let message: IncomingMessage = serde_json::from_str(text)?;
    ClientEvent::try_from(message)
}

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<IncomingMessage> for ClientEvent {
    type Error = EventShapeError;

    fn try_from(message: IncomingMessage) -> Result<Self, Self::Error> {
        let event = message.r#type;
        match event {
            MessageType::PlayerMove | MessageType::BallMove => {
                let data = message.data.ok_or(EventShapeError::MissingPayload(event))?;
                let kind = if event == MessageType::PlayerMove {
                    MovementKind::Player
                } else {
                    MovementKind::Ball
                };
                Ok(Self::Movement {
                    kind,
                    payload: MovementPayload::new(data)?,
                })
            }
            MessageType::PathDraw => {
                let data = message.data.ok_or(EventShapeError::MissingPayload(event))?;
                let payload: PathDrawPayload =
                    serde_json::from_value(data).map_err(|e| EventShapeError::InvalidPayload {
                        event,
                        reason: e.to_string(),
                    })?;
                Ok(Self::DrawPath {
                    path: StrokePath::new(to_points(payload.path))?,
                    color: color_from(payload.color.as_ref()),
                })
            }
            MessageType::PathDrawPartial => {
                let data = message.data.ok_or(EventShapeError::MissingPayload(event))?;
                let payload: PathDrawPartialPayload =
                    serde_json::from_value(data).map_err(|e| EventShapeError::InvalidPayload {
                        event,
                        reason: e.to_string(),
                    })?;
                Ok(Self::DrawPartialPath {
                    points: SegmentPoints::new(to_points(payload.segment))?,
                    color: color_from(payload.color.as_ref()),
                    last: payload.last.as_ref().is_some_and(is_truthy),
                })
            }
            MessageType::PathClear => Ok(Self::ClearPaths),
            MessageType::ExistingPaths => Err(EventShapeError::NotAcceptedFromClient(event)),
        }
    }
}

impl From<AnalyzeRequestDto> for PitchSnapshot {
    fn from(dto: AnalyzeRequestDto) -> Self {
        Self {
            green: dto.green,
            black: dto.black,
            ball: dto.ball,
        }
    }
}

fn to_points(pairs: Vec<[Number; 2]>) -> Vec<Point> {
    pairs.into_iter().map(|[x, y]| Point(x, y)).collect()
}

fn color_from(value: Option<&serde_json::Value>) -> StrokeColor {
    StrokeColor::from_requested(value.and_then(serde_json::Value::as_str))
}

/// Truthiness the way browser clients compute it for the `last` flag.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

// ========================================
// Domain → DTO
// ========================================

fn to_pairs(points: &[Point]) -> Vec<[Number; 2]> {
    points.iter().map(|p| [p.0.clone(), p.1.clone()]).collect()
}

impl From<&StrokeRecord> for PathDto {
    fn from(record: &StrokeRecord) -> Self {
        Self {
            id: record.author.as_str().to_string(),
            path: to_pairs(record.path.points()),
            color: record.color.as_str().to_string(),
            ts: record.drawn_at.value(),
        }
    }
}

impl From<&StrokeSegment> for PartialPathDto {
    fn from(segment: &StrokeSegment) -> Self {
        Self {
            id: segment.author.as_str().to_string(),
            segment: to_pairs(segment.points.points()),
            color: segment.color.as_str().to_string(),
            ts: segment.drawn_at.value(),
            last: segment.last,
        }
    }
}

impl From<&ServerEvent> for OutgoingMessage {
    fn from(event: &ServerEvent) -> Self {
        match event {
            ServerEvent::Movement {
                kind: MovementKind::Player,
                payload,
            } => Self::PlayerMove(payload.as_value().clone()),
            ServerEvent::Movement {
                kind: MovementKind::Ball,
                payload,
            } => Self::BallMove(payload.as_value().clone()),
            ServerEvent::PathDrawn(record) => Self::PathDraw(record.into()),
            ServerEvent::PartialPathDrawn(segment) => Self::PathDrawPartial(segment.into()),
            ServerEvent::PathsCleared => Self::PathClear,
            ServerEvent::ExistingPaths(records) => {
                Self::ExistingPaths(records.iter().map(PathDto::from).collect())
            }
        }
    }
}

impl From<&StrokeRecord> for StoredPathDto {
    fn from(record: &StrokeRecord) -> Self {
        Self {
            id: record.author.as_str().to_string(),
            color: record.color.as_str().to_string(),
            points: record.path.len(),
            drawn_at: touchline_shared::time::timestamp_to_rfc3339(record.drawn_at.value()),
        }
    }
}

impl From<TacticalAnalysis> for AnalyzeResponseDto {
    fn from(analysis: TacticalAnalysis) -> Self {
        Self {
            detected_formation: analysis.reading.formation,
            phase: analysis.reading.phase,
            red: analysis.red,
            coach_comment: analysis.coach_comment,
        }
    }
}
