//! WebSocket を使った MessagePusher 実装（Broadcast Router）
//!
//! ## 責務
//!
//! - 送信先の選定（送信者以外 / 全員 / 1 接続のみ）
//! - `ServerEvent` をワイヤ形式の JSON にエンコードし、各接続のチャンネルへ送る
//!
//! ## 設計ノート
//!
//! 接続と sender の対応は `ConnectionRegistry` が管理します。
//! この実装はレジストリから sender を取得し、メッセージ送信にだけ使用します。
//! - UI 層: WebSocket 接続の受付、sender の生成
//! - Registry: sender の管理
//! - MessagePusher: 送信先の選定、メッセージ送信

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, MessagePushError, MessagePusher, ServerEvent},
    infrastructure::dto::websocket::OutgoingMessage,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let registry = Arc::new(InMemoryConnectionRegistry::new(Arc::new(Mutex::new(HashMap::new()))));
/// let pusher = WebSocketMessagePusher::new(registry.clone());
///
/// // 送信者以外に送信
/// pusher.broadcast_excluding(&sender_id, &ServerEvent::PathsCleared).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続レジストリ
    registry: Arc<dyn ConnectionRegistry>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    fn encode(event: &ServerEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&OutgoingMessage::from(event))
            .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
    }

    /// `exclude` 以外の全ての接続に送信する
    async fn fan_out(
        &self,
        exclude: Option<&ConnectionId>,
        event: &ServerEvent,
    ) -> Result<usize, MessagePushError> {
        let content = Self::encode(event)?;
        let mut delivered = 0;

        for (target, sender) in self.registry.channels().await {
            if exclude == Some(&target) {
                continue;
            }
            // ブロードキャストでは一部の送信失敗を許容（切断途中の接続）
            if let Err(e) = sender.send(content.clone()) {
                tracing::warn!("Failed to push message to connection '{}': {}", target, e);
            } else {
                delivered += 1;
            }
        }

        tracing::debug!(
            "Broadcasted {} point(s) to {} connection(s)",
            event.point_count(),
            delivered
        );
        Ok(delivered)
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn push_to(
        &self,
        id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let sender = self
            .registry
            .channel_of(id)
            .await
            .ok_or_else(|| MessagePushError::ClientNotFound(id.as_str().to_string()))?;

        let content = Self::encode(event)?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to connection '{}'", id);
        Ok(())
    }

    async fn broadcast_excluding(
        &self,
        sender: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<usize, MessagePushError> {
        self.fan_out(Some(sender), event).await
    }

    async fn broadcast_all(&self, event: &ServerEvent) -> Result<usize, MessagePushError> {
        self.fan_out(None, event).await
    }
}
