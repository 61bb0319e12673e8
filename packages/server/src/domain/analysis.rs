//! Tactical analysis model.
//!
//! The reading (formation + phase) is derived locally; the coach comment is
//! delegated to a [`CommentGenerator`]. When delegation fails the caller
//! substitutes [`TacticalReading::fallback_comment`].

use async_trait::async_trait;
use thiserror::Error;

/// Marker positions sent by the board. Shapes are not interpreted, so any JSON
/// value is accepted for each team and for the ball.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PitchSnapshot {
    pub green: serde_json::Value,
    pub black: serde_json::Value,
    pub ball: serde_json::Value,
}

/// Formation and game phase inferred from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticalReading {
    pub formation: String,
    pub phase: String,
}

impl TacticalReading {
    pub const DEFAULT_FORMATION: &'static str = "4-4-2";
    pub const DEFAULT_PHASE: &'static str = "defesa";

    /// Every snapshot is currently read as a 4-4-2 in the defensive phase.
    pub fn from_snapshot(_snapshot: &PitchSnapshot) -> Self {
        Self {
            formation: Self::DEFAULT_FORMATION.to_string(),
            phase: Self::DEFAULT_PHASE.to_string(),
        }
    }

    /// Deterministic comment used whenever the generator cannot answer.
    pub fn fallback_comment(&self) -> String {
        format!(
            "O adversário joga em {}, estamos na fase {}.",
            self.formation, self.phase
        )
    }
}

/// Result returned to the board.
#[derive(Debug, Clone, PartialEq)]
pub struct TacticalAnalysis {
    pub reading: TacticalReading,
    /// Third marker set; always empty for now.
    pub red: Vec<serde_json::Value>,
    pub coach_comment: String,
}

/// Why the generator could not produce a comment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("no credential configured for the text-generation API")]
    MissingCredential,

    #[error("text-generation request timed out")]
    Timeout,

    #[error("text-generation request failed: {0}")]
    Transport(String),

    #[error("text-generation API answered with status {0}")]
    Status(u16),

    #[error("text-generation response could not be parsed: {0}")]
    MalformedResponse(String),

    #[error("text-generation response contained no comment")]
    EmptyComment,
}

/// Produces a natural-language coach comment for a reading.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentGenerator: Send + Sync {
    async fn generate(&self, reading: &TacticalReading) -> Result<String, CommentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_uses_default_labels() {
        // テスト項目: どのスナップショットでも 4-4-2 / defesa と判定される
        // given (前提条件):
        let snapshot = PitchSnapshot {
            green: serde_json::json!({"p1": {"x": 1, "y": 2}}),
            black: serde_json::Value::Null,
            ball: serde_json::json!({"x": 50, "y": 30}),
        };

        // when (操作):
        let reading = TacticalReading::from_snapshot(&snapshot);

        // then (期待する結果):
        assert_eq!(reading.formation, "4-4-2");
        assert_eq!(reading.phase, "defesa");
    }

    #[test]
    fn test_fallback_comment_names_formation_and_phase() {
        // テスト項目: フォールバックのコメントにフォーメーションとフェーズが含まれる
        // given (前提条件):
        let reading = TacticalReading {
            formation: "3-5-2".to_string(),
            phase: "ataque".to_string(),
        };

        // when (操作):
        let comment = reading.fallback_comment();

        // then (期待する結果):
        assert_eq!(comment, "O adversário joga em 3-5-2, estamos na fase ataque.");
    }
}
