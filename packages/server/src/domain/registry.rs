//! Connection Registry trait 定義
//!
//! 接続中のクライアントを管理し、各接続に一意な ID を割り当てます。
//! ブロードキャスト時に送信者を除外できるのは、この ID のおかげです。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ConnectionId;

/// クライアントへメッセージ（エンコード済み JSON）を届けるチャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// 接続レジストリ
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 新しい接続を登録し、割り当てた ID を返す
    async fn register(&self, channel: PusherChannel) -> ConnectionId;

    /// 接続を登録解除する（登録されていなかった場合は false）
    async fn unregister(&self, id: &ConnectionId) -> bool;

    /// 接続中の全ての ID を取得
    async fn connected_ids(&self) -> Vec<ConnectionId>;

    /// 指定した接続のチャンネルを取得
    async fn channel_of(&self, id: &ConnectionId) -> Option<PusherChannel>;

    /// 接続中の全ての ID とチャンネルの組を取得（その時点のコピー）
    async fn channels(&self) -> Vec<(ConnectionId, PusherChannel)>;

    /// 接続数を取得
    async fn count(&self) -> usize;
}
