//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断した接続に以後のイベントが届かないことを保証
//! - ストロークは描いた人の切断後も履歴に残る
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続中の参加者の切断
//! - 異常系：存在しない（切断済みの）接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

use super::{error::DisconnectError, timeline::EventTimeline};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    timeline: Arc<EventTimeline>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, timeline: Arc<EventTimeline>) -> Self {
        Self { registry, timeline }
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 切断後に残っている接続数
    /// * `Err(DisconnectError)` - 接続が登録されていない
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<usize, DisconnectError> {
        let _turn = self.timeline.enter().await;

        if !self.registry.unregister(connection_id).await {
            return Err(DisconnectError::NotConnected(connection_id.to_string()));
        }

        let remaining = self.registry.count().await;
        tracing::info!(
            "Connection '{}' left ({} remaining)",
            connection_id,
            remaining
        );
        Ok(remaining)
    }
}
