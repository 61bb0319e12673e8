//! UseCase: キャンバスのクリア
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ClearPathsUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - クリアは送信者を含む全員に届く唯一のイベント
//! - クリア後に参加した人にはリプレイが送られない
//!
//! ### どのような状況を想定しているか
//! - 正常系：履歴ありのクリア
//! - エッジケース：履歴が空の状態でのクリア

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, ServerEvent, StrokeHistoryRepository};

use super::{error::RelayError, timeline::EventTimeline};

/// クリア結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleared {
    /// 履歴から削除したストロークの数
    pub removed: usize,
    /// path_clear を届けた接続数
    pub delivered: usize,
}

/// キャンバスクリアのユースケース
pub struct ClearPathsUseCase {
    history: Arc<dyn StrokeHistoryRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    timeline: Arc<EventTimeline>,
}

impl ClearPathsUseCase {
    pub fn new(
        history: Arc<dyn StrokeHistoryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        timeline: Arc<EventTimeline>,
    ) -> Self {
        Self {
            history,
            message_pusher,
            timeline,
        }
    }

    /// 履歴を空にし、送信者を含む全員に path_clear を送る
    pub async fn execute(&self, sender: &ConnectionId) -> Result<Cleared, RelayError> {
        let _turn = self.timeline.enter().await;

        let removed = self.history.clear().await;
        let delivered = self
            .message_pusher
            .broadcast_all(&ServerEvent::PathsCleared)
            .await?;

        tracing::info!(
            "Connection '{}' cleared the board ({} path(s) removed)",
            sender,
            removed
        );
        Ok(Cleared { removed, delivered })
    }
}
