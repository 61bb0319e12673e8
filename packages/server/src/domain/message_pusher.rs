//! MessagePusher trait 定義（Broadcast Router）
//!
//! 送信先の選定（送信者以外 / 全員 / 1 接続のみ）と配送のインターフェース。
//! 配送はベストエフォートで、切断途中の接続に届かなくてもエラーにはしない。

use async_trait::async_trait;

use super::{ConnectionId, MessagePushError, ServerEvent};

#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 1 つの接続にだけ送信する（参加時の履歴再送に使用）
    async fn push_to(&self, id: &ConnectionId, event: &ServerEvent)
    -> Result<(), MessagePushError>;

    /// 送信者以外の全ての接続に送信し、送信先の数を返す
    async fn broadcast_excluding(
        &self,
        sender: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<usize, MessagePushError>;

    /// 送信者を含む全ての接続に送信し、送信先の数を返す
    async fn broadcast_all(&self, event: &ServerEvent) -> Result<usize, MessagePushError>;
}
