//! Stroke history buffer
//!
//! 確定ストロークを挿入順に保持する有界バッファ。容量を超えると最も古いものから
//! 破棄する（厳密な FIFO）。

use std::collections::VecDeque;

use super::entity::StrokeRecord;

/// 履歴バッファのデフォルト容量
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// 確定ストロークの履歴
#[derive(Debug, Clone)]
pub struct StrokeHistory {
    records: VecDeque<StrokeRecord>,
    capacity: usize,
}

impl StrokeHistory {
    /// デフォルト容量（200 件）で作成
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// 容量を指定して作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 末尾に追加し、容量を超えた分を先頭から破棄する
    ///
    /// 破棄されたレコードを古い順に返す。
    pub fn append(&mut self, record: StrokeRecord) -> Vec<StrokeRecord> {
        self.records.push_back(record);
        let mut evicted = Vec::new();
        while self.records.len() > self.capacity {
            if let Some(oldest) = self.records.pop_front() {
                evicted.push(oldest);
            }
        }
        evicted
    }

    /// 現在の内容を挿入順で返す
    pub fn snapshot(&self) -> Vec<StrokeRecord> {
        self.records.iter().cloned().collect()
    }

    /// 全て破棄し、破棄した件数を返す
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for StrokeHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        ConnectionId, Point, StrokeColor, StrokePath, Timestamp,
    };

    fn record(seq: i64) -> StrokeRecord {
        StrokeRecord::new(
            ConnectionId::new("alice".to_string()).unwrap(),
            StrokePath::new(vec![Point::new(0, 0), Point::new(seq, seq)]).unwrap(),
            StrokeColor::default(),
            Timestamp::new(seq),
        )
    }

    #[test]
    fn test_new_history_is_empty() {
        // テスト項目: 作成直後の履歴は空で、容量は 200
        // given (前提条件):

        // when (操作):
        let history = StrokeHistory::new();

        // then (期待する結果):
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 200);
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        // テスト項目: 追加した順序でスナップショットが返される
        // given (前提条件):
        let mut history = StrokeHistory::new();

        // when (操作):
        for seq in 1..=3 {
            history.append(record(seq));
        }

        // then (期待する結果):
        let stamps: Vec<i64> = history
            .snapshot()
            .iter()
            .map(|r| r.drawn_at.value())
            .collect();
        assert_eq!(stamps, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_evicts_oldest_when_full() {
        // テスト項目: 201 件目の追加で 1 件目が破棄され、2〜201 件目が順序通り残る
        // given (前提条件):
        let mut history = StrokeHistory::new();
        for seq in 1..=200 {
            assert!(history.append(record(seq)).is_empty());
        }

        // when (操作):
        let evicted = history.append(record(201));

        // then (期待する結果):
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].drawn_at.value(), 1);
        assert_eq!(history.len(), 200);
        let stamps: Vec<i64> = history
            .snapshot()
            .iter()
            .map(|r| r.drawn_at.value())
            .collect();
        assert_eq!(stamps, (2..=201).collect::<Vec<i64>>());
    }

    #[test]
    fn test_never_exceeds_capacity() {
        // テスト項目: どれだけ追加しても容量を超えず、直近の記録だけが残る
        // given (前提条件):
        let mut history = StrokeHistory::with_capacity(5);

        // when (操作):
        for seq in 1..=42 {
            history.append(record(seq));
            assert!(history.len() <= 5);
        }

        // then (期待する結果):
        let stamps: Vec<i64> = history
            .snapshot()
            .iter()
            .map(|r| r.drawn_at.value())
            .collect();
        assert_eq!(stamps, vec![38, 39, 40, 41, 42]);
    }

    #[test]
    fn test_clear_empties_history() {
        // テスト項目: clear で全件破棄され、破棄件数が返される
        // given (前提条件):
        let mut history = StrokeHistory::new();
        history.append(record(1));
        history.append(record(2));

        // when (操作):
        let removed = history.clear();

        // then (期待する結果):
        assert_eq!(removed, 2);
        assert!(history.is_empty());
        assert!(history.snapshot().is_empty());
    }
}
