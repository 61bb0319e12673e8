//! UseCase テスト用の共通セットアップ
//!
//! 実際のインメモリ実装（レジストリ・履歴・WebSocketMessagePusher）を組み立て、
//! 各接続のチャンネルに届いた JSON を検証できるようにする。

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::{ConnectionId, ConnectionRegistry, StrokeHistory},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, registry::InMemoryConnectionRegistry,
        repository::InMemoryStrokeHistoryRepository,
    },
};

use super::EventTimeline;

pub(crate) struct TestBoard {
    pub registry: Arc<InMemoryConnectionRegistry>,
    pub history: Arc<InMemoryStrokeHistoryRepository>,
    pub pusher: Arc<WebSocketMessagePusher>,
    pub timeline: Arc<EventTimeline>,
}

impl TestBoard {
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryConnectionRegistry::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))));
        let history = Arc::new(InMemoryStrokeHistoryRepository::new(Arc::new(Mutex::new(
            StrokeHistory::new(),
        ))));
        let pusher = Arc::new(WebSocketMessagePusher::new(registry.clone()));
        Self {
            registry,
            history,
            pusher,
            timeline: Arc::new(EventTimeline::new()),
        }
    }

    /// レジストリに直接接続を登録する（リプレイなし）
    pub async fn join(&self) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.registry.register(tx).await;
        (id, rx)
    }
}

/// チャンネルに溜まっているメッセージを全て取り出して JSON にする
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<serde_json::Value> {
    let mut messages = Vec::new();
    while let Ok(text) = rx.try_recv() {
        messages.push(serde_json::from_str(&text).unwrap());
    }
    messages
}
