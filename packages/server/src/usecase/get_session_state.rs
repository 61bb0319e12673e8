//! UseCase: セッション状態の取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, StrokeHistoryRepository, StrokeRecord};

/// 現在の接続と保存済みストローク
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// 接続 ID（ソート済み）
    pub connections: Vec<ConnectionId>,
    /// 保存済みストローク（挿入順）
    pub strokes: Vec<StrokeRecord>,
}

/// セッション状態取得のユースケース
pub struct GetSessionStateUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    history: Arc<dyn StrokeHistoryRepository>,
}

impl GetSessionStateUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        history: Arc<dyn StrokeHistoryRepository>,
    ) -> Self {
        Self { registry, history }
    }

    pub async fn execute(&self) -> SessionState {
        let mut connections = self.registry.connected_ids().await;
        connections.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        SessionState {
            connections,
            strokes: self.history.snapshot().await,
        }
    }
}
