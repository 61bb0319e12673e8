//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::MessagePushError;

/// 接続処理のエラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectError {
    #[error("failed to replay stored paths: {0}")]
    ReplayFailed(#[from] MessagePushError),
}

/// 切断処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    #[error("connection '{0}' is not connected")]
    NotConnected(String),
}

/// イベント中継のエラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    #[error("failed to relay event: {0}")]
    BroadcastFailed(#[from] MessagePushError),
}

/// 戦術分析のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("analysis task failed: {0}")]
    Internal(String),
}
