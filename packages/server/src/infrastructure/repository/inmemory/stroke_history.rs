//! InMemory StrokeHistory Repository 実装
//!
//! ドメイン層が定義する StrokeHistoryRepository trait の具体的な実装。
//! ドメインモデル（`StrokeHistory`）をそのままストレージとして使用します。
//! サーバープロセスの終了とともに履歴は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{StrokeHistory, StrokeHistoryRepository, StrokeRecord};

/// インメモリ StrokeHistory Repository 実装
pub struct InMemoryStrokeHistoryRepository {
    /// StrokeHistory ドメインモデル
    history: Arc<Mutex<StrokeHistory>>,
}

impl InMemoryStrokeHistoryRepository {
    /// 新しい InMemoryStrokeHistoryRepository を作成
    pub fn new(history: Arc<Mutex<StrokeHistory>>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl StrokeHistoryRepository for InMemoryStrokeHistoryRepository {
    async fn append(&self, record: StrokeRecord) -> usize {
        let mut history = self.history.lock().await;
        let evicted = history.append(record);
        if !evicted.is_empty() {
            tracing::debug!(
                "Evicted {} oldest path(s) from history (capacity {})",
                evicted.len(),
                history.capacity()
            );
        }
        evicted.len()
    }

    async fn snapshot(&self) -> Vec<StrokeRecord> {
        let history = self.history.lock().await;
        history.snapshot()
    }

    async fn clear(&self) -> usize {
        let mut history = self.history.lock().await;
        history.clear()
    }

    async fn count(&self) -> usize {
        let history = self.history.lock().await;
        history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, Point, StrokeColor, StrokePath, Timestamp};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryStrokeHistoryRepository の追加・スナップショット・全消去
    // - 容量超過時に古いものから破棄されること
    //
    // 【なぜこのテストが必要か】
    // - 履歴は新規参加者への再送に使われる唯一の共有状態
    // - UseCase 層が Repository に依存できるよう、信頼性を担保する
    // ========================================

    fn create_test_repository(capacity: usize) -> InMemoryStrokeHistoryRepository {
        let history = Arc::new(Mutex::new(StrokeHistory::with_capacity(capacity)));
        InMemoryStrokeHistoryRepository::new(history)
    }

    fn record(seq: i64) -> StrokeRecord {
        StrokeRecord::new(
            ConnectionId::new("alice".to_string()).unwrap(),
            StrokePath::new(vec![Point::new(0, 0), Point::new(1, 1)]).unwrap(),
            StrokeColor::default(),
            Timestamp::new(seq),
        )
    }

    #[tokio::test]
    async fn test_append_and_snapshot() {
        // テスト項目: 追加した記録がスナップショットに挿入順で含まれる
        // given (前提条件):
        let repo = create_test_repository(200);

        // when (操作):
        repo.append(record(1)).await;
        repo.append(record(2)).await;
        let snapshot = repo.snapshot().await;

        // then (期待する結果):
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].drawn_at, Timestamp::new(1));
        assert_eq!(snapshot[1].drawn_at, Timestamp::new(2));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_append_reports_evictions() {
        // テスト項目: 容量超過時に破棄件数が返される
        // given (前提条件):
        let repo = create_test_repository(2);
        repo.append(record(1)).await;
        repo.append(record(2)).await;

        // when (操作):
        let evicted = repo.append(record(3)).await;

        // then (期待する結果):
        assert_eq!(evicted, 1);
        let stamps: Vec<i64> = repo
            .snapshot()
            .await
            .iter()
            .map(|r| r.drawn_at.value())
            .collect();
        assert_eq!(stamps, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_clear() {
        // テスト項目: clear で履歴が空になる
        // given (前提条件):
        let repo = create_test_repository(200);
        repo.append(record(1)).await;

        // when (操作):
        let removed = repo.clear().await;

        // then (期待する結果):
        assert_eq!(removed, 1);
        assert_eq!(repo.count().await, 0);
        assert!(repo.snapshot().await.is_empty());
    }
}
