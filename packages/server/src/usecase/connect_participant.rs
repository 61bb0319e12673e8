//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 接続の登録と、確定ストローク履歴のリプレイ
//!
//! ### なぜこのテストが必要か
//! - 新規参加者は既存のストロークを挿入順に一度だけ受け取る必要がある
//! - 履歴が空のときは何も送らない
//! - リプレイに失敗した接続がレジストリに残らないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：履歴ありの接続（existing_paths を 1 通）
//! - 正常系：履歴なしの接続（メッセージなし）
//! - 異常系：リプレイ送信の失敗（登録を取り消す）
//! - 並行処理：ストローク描画と同時に接続しても、各ストロークをちょうど 1 回受け取る
//!   （existing_paths に含まれるか、その後の path_draw で届くかのどちらか）

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, MessagePusher, PusherChannel, ServerEvent,
    StrokeHistoryRepository,
};

use super::{error::ConnectError, timeline::EventTimeline};

/// 接続結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    pub connection_id: ConnectionId,
    /// リプレイしたストロークの数
    pub replayed: usize,
}

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    history: Arc<dyn StrokeHistoryRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    timeline: Arc<EventTimeline>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        history: Arc<dyn StrokeHistoryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        timeline: Arc<EventTimeline>,
    ) -> Self {
        Self {
            registry,
            history,
            message_pusher,
            timeline,
        }
    }

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `channel` - この接続へのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Connected)` - 割り当てた接続 ID とリプレイ件数
    /// * `Err(ConnectError)` - リプレイの送信に失敗（登録は取り消し済み）
    pub async fn execute(&self, channel: PusherChannel) -> Result<Connected, ConnectError> {
        // 登録とリプレイの間に他のストロークが割り込まないようにする
        let _turn = self.timeline.enter().await;

        // 1. 接続を登録
        let connection_id = self.registry.register(channel).await;

        // 2. 履歴があれば新規参加者にだけ送る
        let records = self.history.snapshot().await;
        let replayed = records.len();
        if replayed > 0 {
            let event = ServerEvent::ExistingPaths(records);
            if let Err(e) = self.message_pusher.push_to(&connection_id, &event).await {
                self.registry.unregister(&connection_id).await;
                return Err(e.into());
            }
        }

        tracing::info!(
            "Connection '{}' joined (replayed {} path(s))",
            connection_id,
            replayed
        );
        Ok(Connected {
            connection_id,
            replayed,
        })
    }
}
