//! Entities
//!
//! ストロークのエンティティ。どちらも生成後に変更されることはない。

use super::value_object::{ConnectionId, SegmentPoints, StrokeColor, StrokePath, Timestamp};

/// 確定ストローク（履歴バッファに保存され、新規参加者へ再送される）
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRecord {
    /// 描画したクライアントの接続 ID
    pub author: ConnectionId,
    pub path: StrokePath,
    pub color: StrokeColor,
    /// サーバーが受信した時刻（表示・並び順のためだけに使う）
    pub drawn_at: Timestamp,
}

impl StrokeRecord {
    pub fn new(
        author: ConnectionId,
        path: StrokePath,
        color: StrokeColor,
        drawn_at: Timestamp,
    ) -> Self {
        Self {
            author,
            path,
            color,
            drawn_at,
        }
    }
}

/// 描画途中のセグメント（保存されず、中継のみ）
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSegment {
    pub author: ConnectionId,
    pub points: SegmentPoints,
    pub color: StrokeColor,
    pub drawn_at: Timestamp,
    /// 送信者自身が付けたストローク終端の印
    pub last: bool,
}

impl StrokeSegment {
    pub fn new(
        author: ConnectionId,
        points: SegmentPoints,
        color: StrokeColor,
        drawn_at: Timestamp,
        last: bool,
    ) -> Self {
        Self {
            author,
            points,
            color,
            drawn_at,
            last,
        }
    }
}
