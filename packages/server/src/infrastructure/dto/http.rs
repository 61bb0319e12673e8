//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// `POST /ai/analyze` request body. Missing fields fall back to empty values;
/// present ones are kept whatever their shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeRequestDto {
    #[serde(default = "empty_array")]
    pub green: serde_json::Value,
    #[serde(default = "empty_array")]
    pub black: serde_json::Value,
    #[serde(default = "empty_object")]
    pub ball: serde_json::Value,
}

impl AnalyzeRequestDto {
    /// Read a raw request body regardless of its content type.
    ///
    /// An empty body, or JSON that is not an object, reads as an empty snapshot.
    /// Only bytes that are not JSON at all are an error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice(body)? {
            fields @ serde_json::Value::Object(_) => {
                Ok(serde_json::from_value(fields).unwrap_or_default())
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Default for AnalyzeRequestDto {
    fn default() -> Self {
        Self {
            green: empty_array(),
            black: empty_array(),
            ball: empty_object(),
        }
    }
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// `POST /ai/analyze` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponseDto {
    pub detected_formation: String,
    pub phase: String,
    pub red: Vec<serde_json::Value>,
    pub coach_comment: String,
}

/// Error body returned by HTTP handlers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

/// `GET /debug/session` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStateDto {
    pub connections: Vec<String>,
    pub paths: Vec<StoredPathDto>,
}

/// A stored path summarized for debugging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPathDto {
    pub id: String,
    pub color: String,
    pub points: usize,
    pub drawn_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analyze_request_keeps_any_shape() {
        // テスト項目: green / black / ball は配列以外の値や null でもそのまま受け付ける
        // given (前提条件):
        let body = br#"{"green":{"p1":{"x":1}},"black":null,"ball":5}"#;

        // when (操作):
        let request = AnalyzeRequestDto::from_body(body).unwrap();

        // then (期待する結果):
        assert_eq!(request.green, json!({"p1": {"x": 1}}));
        assert_eq!(request.black, serde_json::Value::Null);
        assert_eq!(request.ball, json!(5));
    }

    #[test]
    fn test_analyze_request_defaults_missing_fields() {
        // テスト項目: 空のボディ・フィールドのないオブジェクト・オブジェクト以外の JSON は空のスナップショットになる
        // given (前提条件):
        let bodies: [&[u8]; 4] = [b"", b"  \n", b"{}", b"[1, 2, 3]"];

        // when (操作):
        let requests: Vec<AnalyzeRequestDto> = bodies
            .iter()
            .map(|body| AnalyzeRequestDto::from_body(body).unwrap())
            .collect();

        // then (期待する結果):
        for request in requests {
            assert_eq!(request, AnalyzeRequestDto::default());
            assert_eq!(request.green, json!([]));
            assert_eq!(request.ball, json!({}));
        }
    }

    #[test]
    fn test_analyze_request_rejects_non_json() {
        // テスト項目: JSON として読めないボディだけがエラーになる
        // given (前提条件):
        let body = b"{not json";

        // when (操作):
        let result = AnalyzeRequestDto::from_body(body);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
