//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::StrokeRecord;

/// 確定ストローク履歴の Repository trait
///
/// 履歴はプロセス内でのみ保持され、永続化はされない。
/// 容量超過時の破棄（FIFO）は実装側の責務。
#[async_trait]
pub trait StrokeHistoryRepository: Send + Sync {
    /// 末尾に追加し、容量超過で破棄された件数を返す
    async fn append(&self, record: StrokeRecord) -> usize;

    /// 現在の履歴を挿入順で取得
    async fn snapshot(&self) -> Vec<StrokeRecord>;

    /// 履歴を全て破棄し、破棄した件数を返す
    async fn clear(&self) -> usize;

    /// 保持している件数を取得
    async fn count(&self) -> usize;
}
