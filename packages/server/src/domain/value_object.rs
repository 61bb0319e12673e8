//! Value Objects
//!
//! 値オブジェクトは生成時にバリデーションを行い、不正な状態を持たないことを保証します。
//! ストロークの点数制限（切り詰め）もここで適用されます。

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use super::error::DomainError;

/// 確定ストロークが持てる最大の点数（超過分は末尾から切り捨て）
pub const MAX_PATH_POINTS: usize = 1000;
/// 確定ストロークに必要な最小の点数
pub const MIN_PATH_POINTS: usize = 2;
/// 描画途中セグメントが持てる最大の点数（超過分は先頭から切り捨て）
pub const MAX_SEGMENT_POINTS: usize = 200;

/// 接続 ID（接続ごとに一意な不透明な識別子）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// 文字列から ConnectionId を作成（空文字列は不可）
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::EmptyConnectionId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ConnectionId の生成器（UUID v4）
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4().to_string())
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 盤面上の 2D 座標。ワイヤ上は `[x, y]` で表現される。
///
/// 数値はクライアントが送った表現（整数・小数）のまま保持し、そのまま中継する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point(pub Number, pub Number);

impl Point {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self(x.into(), y.into())
    }
}

/// ストロークの色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeColor(String);

impl StrokeColor {
    pub const DEFAULT: &'static str = "#ff3333";

    /// クライアントが指定した色を加工せずに採用する。未指定・空白のみの場合はデフォルト色。
    pub fn from_requested(requested: Option<&str>) -> Self {
        match requested {
            Some(color) if !color.trim().is_empty() => Self(color.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// 確定ストロークの点列（2 点以上、先頭から最大 1000 点）
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath(Vec<Point>);

impl StrokePath {
    /// 点列を検証し、上限を超える場合は先頭の `MAX_PATH_POINTS` 点を残す
    pub fn new(mut points: Vec<Point>) -> Result<Self, DomainError> {
        if points.len() < MIN_PATH_POINTS {
            return Err(DomainError::TooFewPathPoints {
                min: MIN_PATH_POINTS,
                actual: points.len(),
            });
        }
        points.truncate(MAX_PATH_POINTS);
        Ok(Self(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// 描画途中セグメントの点列（1 点以上、末尾から最大 200 点）
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPoints(Vec<Point>);

impl SegmentPoints {
    /// 点列を検証し、上限を超える場合は直近の `MAX_SEGMENT_POINTS` 点を残す
    pub fn new(mut points: Vec<Point>) -> Result<Self, DomainError> {
        if points.is_empty() {
            return Err(DomainError::EmptySegment);
        }
        if points.len() > MAX_SEGMENT_POINTS {
            let overflow = points.len() - MAX_SEGMENT_POINTS;
            points.drain(..overflow);
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// 選手・ボール移動のペイロード。中身は解釈せず、そのまま中継する。
#[derive(Debug, Clone, PartialEq)]
pub struct MovementPayload(serde_json::Value);

impl MovementPayload {
    /// JSON オブジェクトであることだけを検証する
    pub fn new(value: serde_json::Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::MovementPayloadNotObject);
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}
