//! UseCase: 描画途中のストロークの中継
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DrawPartialPathUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 描画中のセグメントは他の参加者にリアルタイムで届くが、保存はされない
//! - 長いセグメントは直近 200 点だけが中継される
//!
//! ### どのような状況を想定しているか
//! - 正常系：セグメントの中継（last フラグ付き）
//! - エッジケース：350 点のセグメント

use std::sync::Arc;

use touchline_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, SegmentPoints, ServerEvent, StrokeColor, StrokeSegment, Timestamp,
};

use super::{error::RelayError, timeline::EventTimeline};

/// 描画途中セグメント中継のユースケース
pub struct DrawPartialPathUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    timeline: Arc<EventTimeline>,
}

impl DrawPartialPathUseCase {
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        timeline: Arc<EventTimeline>,
    ) -> Self {
        Self {
            message_pusher,
            clock,
            timeline,
        }
    }

    pub async fn execute(
        &self,
        sender: &ConnectionId,
        points: SegmentPoints,
        color: StrokeColor,
        last: bool,
    ) -> Result<usize, RelayError> {
        let _turn = self.timeline.enter().await;

        let segment = StrokeSegment::new(
            sender.clone(),
            points,
            color,
            Timestamp::new(self.clock.now_millis()),
            last,
        );
        let delivered = self
            .message_pusher
            .broadcast_excluding(sender, &ServerEvent::PartialPathDrawn(segment))
            .await?;
        Ok(delivered)
    }
}
