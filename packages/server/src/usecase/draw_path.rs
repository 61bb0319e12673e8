//! UseCase: 確定ストロークの描画
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DrawPathUseCase::execute() メソッド
//! - 履歴への追加と送信者以外へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 確定ストロークは後から参加した人へのリプレイ対象になる
//! - 中継されるレコードと保存されるレコードが同一であることを保証
//! - 履歴の上限（200 件）を超えたら古い順に捨てられる
//!
//! ### どのような状況を想定しているか
//! - 正常系：ストロークの保存と中継
//! - エッジケース：201 件目の追加で先頭が捨てられる
//! - エッジケース：1000 点を超えるストローク（先頭 1000 点に切り詰め済み）

use std::sync::Arc;

use touchline_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, ServerEvent, StrokeColor, StrokeHistoryRepository, StrokePath,
    StrokeRecord, Timestamp,
};

use super::{error::RelayError, timeline::EventTimeline};

/// 確定ストローク描画のユースケース
pub struct DrawPathUseCase {
    history: Arc<dyn StrokeHistoryRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    timeline: Arc<EventTimeline>,
}

impl DrawPathUseCase {
    pub fn new(
        history: Arc<dyn StrokeHistoryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        timeline: Arc<EventTimeline>,
    ) -> Self {
        Self {
            history,
            message_pusher,
            clock,
            timeline,
        }
    }

    /// ストロークを履歴に追加し、送信者以外にブロードキャストする
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 転送した接続数
    pub async fn execute(
        &self,
        sender: &ConnectionId,
        path: StrokePath,
        color: StrokeColor,
    ) -> Result<usize, RelayError> {
        let _turn = self.timeline.enter().await;

        let record = StrokeRecord::new(
            sender.clone(),
            path,
            color,
            Timestamp::new(self.clock.now_millis()),
        );

        self.history.append(record.clone()).await;

        let delivered = self
            .message_pusher
            .broadcast_excluding(sender, &ServerEvent::PathDrawn(record))
            .await?;
        Ok(delivered)
    }
}
