//! WebSocket message DTOs.
//!
//! Every frame is a JSON text message of the form `{"type": ..., "data": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Event names accepted from clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "player-move")]
    PlayerMove,
    #[serde(rename = "ball-move")]
    BallMove,
    #[serde(rename = "path_draw")]
    PathDraw,
    #[serde(rename = "path_draw_partial")]
    PathDrawPartial,
    #[serde(rename = "path_clear")]
    PathClear,
    #[serde(rename = "existing_paths")]
    ExistingPaths,
}

/// Envelope of an inbound frame. `data` is checked per event type afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub r#type: MessageType,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// `path_draw` payload sent by a client
#[derive(Debug, Clone, Deserialize)]
pub struct PathDrawPayload {
    pub path: Vec<[Number; 2]>,
    #[serde(default)]
    pub color: Option<serde_json::Value>,
}

/// `path_draw_partial` payload sent by a client
#[derive(Debug, Clone, Deserialize)]
pub struct PathDrawPartialPayload {
    pub segment: Vec<[Number; 2]>,
    #[serde(default)]
    pub color: Option<serde_json::Value>,
    #[serde(default)]
    pub last: Option<serde_json::Value>,
}

/// A finalized path as seen by other clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDto {
    pub id: String,
    pub path: Vec<[Number; 2]>,
    pub color: String,
    pub ts: i64,
}

/// An in-progress segment as seen by other clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialPathDto {
    pub id: String,
    pub segment: Vec<[Number; 2]>,
    pub color: String,
    pub ts: i64,
    pub last: bool,
}

/// Outbound frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OutgoingMessage {
    #[serde(rename = "player-move")]
    PlayerMove(serde_json::Value),
    #[serde(rename = "ball-move")]
    BallMove(serde_json::Value),
    #[serde(rename = "path_draw")]
    PathDraw(PathDto),
    #[serde(rename = "path_draw_partial")]
    PathDrawPartial(PartialPathDto),
    #[serde(rename = "path_clear")]
    PathClear,
    #[serde(rename = "existing_paths")]
    ExistingPaths(Vec<PathDto>),
}
