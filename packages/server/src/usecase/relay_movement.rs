//! UseCase: 駒・ボールの移動の中継
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMovementUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 移動イベントは送信者以外に同じイベント名・同じペイロードで届く必要がある
//! - 履歴には保存されない
//!
//! ### どのような状況を想定しているか
//! - 正常系：player-move / ball-move の中継
//! - エッジケース：送信者しか接続していない場合

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, MovementKind, MovementPayload, ServerEvent};

use super::{error::RelayError, timeline::EventTimeline};

/// 移動イベント中継のユースケース
pub struct RelayMovementUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    timeline: Arc<EventTimeline>,
}

impl RelayMovementUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>, timeline: Arc<EventTimeline>) -> Self {
        Self {
            message_pusher,
            timeline,
        }
    }

    /// 送信者以外に移動イベントをそのまま転送する
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 転送した接続数
    pub async fn execute(
        &self,
        sender: &ConnectionId,
        kind: MovementKind,
        payload: MovementPayload,
    ) -> Result<usize, RelayError> {
        let _turn = self.timeline.enter().await;

        let event = ServerEvent::Movement { kind, payload };
        let delivered = self
            .message_pusher
            .broadcast_excluding(sender, &event)
            .await?;
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::StrokeHistoryRepository,
        usecase::fixture::{TestBoard, drain},
    };
    use serde_json::json;

    fn create_usecase(board: &TestBoard) -> RelayMovementUseCase {
        RelayMovementUseCase::new(board.pusher.clone(), board.timeline.clone())
    }

    #[tokio::test]
    async fn test_player_move_forwarded_verbatim() {
        // テスト項目: player-move が送信者以外にそのまま届く
        // given (前提条件):
        let board = TestBoard::new();
        let usecase = create_usecase(&board);
        let (alice, mut rx_alice) = board.join().await;
        let (_bob, mut rx_bob) = board.join().await;
        let payload = json!({"id": "g7", "x": 120.5, "y": 80, "team": "green"});

        // when (操作):
        let delivered = usecase
            .execute(
                &alice,
                MovementKind::Player,
                MovementPayload::new(payload.clone()).unwrap(),
            )
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(delivered, 1);
        assert_eq!(
            drain(&mut rx_bob),
            vec![json!({"type": "player-move", "data": payload})]
        );
        assert!(drain(&mut rx_alice).is_empty());
    }

    #[tokio::test]
    async fn test_ball_move_not_stored() {
        // テスト項目: ball-move は中継されるが履歴には残らない
        // given (前提条件):
        let board = TestBoard::new();
        let usecase = create_usecase(&board);
        let (alice, _rx_alice) = board.join().await;
        let (_bob, mut rx_bob) = board.join().await;

        // when (操作):
        usecase
            .execute(
                &alice,
                MovementKind::Ball,
                MovementPayload::new(json!({"x": 1, "y": 2})).unwrap(),
            )
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(drain(&mut rx_bob)[0]["type"], "ball-move");
        assert_eq!(board.history.count().await, 0);
    }

    #[tokio::test]
    async fn test_sender_alone() {
        // テスト項目: 送信者しかいない場合は誰にも届かない
        // given (前提条件):
        let board = TestBoard::new();
        let usecase = create_usecase(&board);
        let (alice, mut rx_alice) = board.join().await;

        // when (操作):
        let delivered = usecase
            .execute(
                &alice,
                MovementKind::Ball,
                MovementPayload::new(json!({"x": 1})).unwrap(),
            )
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(delivered, 0);
        assert!(drain(&mut rx_alice).is_empty());
    }
}
