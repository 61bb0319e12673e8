//! イベントの処理順序を直列化するロック
//!
//! 履歴バッファと接続レジストリを触るユースケースは、処理の開始から
//! 全チャンネルへの送信が終わるまで `EventTimeline::enter` のガードを保持する。
//! 送信は非ブロッキングのチャンネルなので、ネットワーク I/O 中に保持されることはない。

use tokio::sync::{Mutex, MutexGuard};

/// 1 イベントずつ処理するためのロック
#[derive(Debug, Default)]
pub struct EventTimeline {
    turn: Mutex<()>,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// 自分の番を待つ。ガードを drop するまで他のイベントは処理されない
    pub async fn enter(&self) -> MutexGuard<'_, ()> {
        self.turn.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};

    #[tokio::test]
    async fn test_enter_is_exclusive() {
        // テスト項目: ガードを保持している間は次のイベントが処理されない
        // given (前提条件):
        let timeline = Arc::new(EventTimeline::new());
        let guard = timeline.enter().await;

        // when (操作):
        let waiter = {
            let timeline = timeline.clone();
            tokio::spawn(async move {
                let _turn = timeline.enter().await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // then (期待する結果):
        assert!(!waiter.is_finished());
        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }
}
