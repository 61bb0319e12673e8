//! InMemory Connection Registry 実装
//!
//! ## 責務
//!
//! - 接続ごとに一意な ID（UUID v4）を割り当てる
//! - 接続 ID と WebSocket の `UnboundedSender` の対応を管理
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! このレジストリは生成された sender を受け取り、保持するだけです。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionIdFactory, ConnectionRegistry, PusherChannel};

/// インメモリ Connection Registry 実装
pub struct InMemoryConnectionRegistry {
    /// 接続中のクライアントの WebSocket sender
    ///
    /// Key: ConnectionId
    /// Value: PusherChannel
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, channel: PusherChannel) -> ConnectionId {
        let mut clients = self.clients.lock().await;
        // 使用中の ID とは重複させない
        let mut id = ConnectionIdFactory::generate();
        while clients.contains_key(&id) {
            id = ConnectionIdFactory::generate();
        }
        clients.insert(id.clone(), channel);
        tracing::debug!("Connection '{}' registered", id);
        id
    }

    async fn unregister(&self, id: &ConnectionId) -> bool {
        let mut clients = self.clients.lock().await;
        let removed = clients.remove(id).is_some();
        if removed {
            tracing::debug!("Connection '{}' unregistered", id);
        }
        removed
    }

    async fn connected_ids(&self) -> Vec<ConnectionId> {
        let clients = self.clients.lock().await;
        clients.keys().cloned().collect()
    }

    async fn channel_of(&self, id: &ConnectionId) -> Option<PusherChannel> {
        let clients = self.clients.lock().await;
        clients.get(id).cloned()
    }

    async fn channels(&self) -> Vec<(ConnectionId, PusherChannel)> {
        let clients = self.clients.lock().await;
        clients
            .iter()
            .map(|(id, channel)| (id.clone(), channel.clone()))
            .collect()
    }

    async fn count(&self) -> usize {
        let clients = self.clients.lock().await;
        clients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn create_test_registry() -> InMemoryConnectionRegistry {
        InMemoryConnectionRegistry::new(Arc::new(Mutex::new(HashMap::new())))
    }

    #[tokio::test]
    async fn test_register_assigns_distinct_ids() {
        // テスト項目: 接続ごとに異なる ID が割り当てられる
        // given (前提条件):
        let registry = create_test_registry();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        // when (操作):
        let id1 = registry.register(tx1).await;
        let id2 = registry.register(tx2).await;

        // then (期待する結果):
        assert_ne!(id1, id2);
        assert_eq!(registry.count().await, 2);
        let ids = registry.connected_ids().await;
        assert!(ids.contains(&id1));
        assert!(ids.contains(&id2));
    }

    #[tokio::test]
    async fn test_unregister() {
        // テスト項目: 登録解除後はチャンネルが取得できない
        // given (前提条件):
        let registry = create_test_registry();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = registry.register(tx).await;

        // when (操作):
        let removed = registry.unregister(&id).await;

        // then (期待する結果):
        assert!(removed);
        assert_eq!(registry.count().await, 0);
        assert!(registry.channel_of(&id).await.is_none());
    }

    #[tokio::test]
    async fn test_unregister_unknown_id() {
        // テスト項目: 未登録の ID の登録解除は false を返す（冪等）
        // given (前提条件):
        let registry = create_test_registry();
        let unknown = ConnectionId::new("ghost".to_string()).unwrap();

        // when (操作):
        let removed = registry.unregister(&unknown).await;

        // then (期待する結果):
        assert!(!removed);
    }

    #[tokio::test]
    async fn test_channels_returns_registered_senders() {
        // テスト項目: channels で取得した sender から該当クライアントに届く
        // given (前提条件):
        let registry = create_test_registry();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = registry.register(tx).await;

        // when (操作):
        let channels = registry.channels().await;

        // then (期待する結果):
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].0, id);
        channels[0].1.send("ping".to_string()).unwrap();
        assert_eq!(rx.recv().await, Some("ping".to_string()));
    }
}
