//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    AnalyzeTacticsUseCase, ClearPathsUseCase, ConnectParticipantUseCase,
    DisconnectParticipantUseCase, DrawPartialPathUseCase, DrawPathUseCase,
    GetSessionStateUseCase, RelayMovementUseCase,
};

/// Use cases reachable from the handlers
pub struct AppState {
    /// ConnectParticipantUseCase（参加者接続のユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（参加者切断のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// RelayMovementUseCase（駒・ボール移動の中継）
    pub relay_movement_usecase: Arc<RelayMovementUseCase>,
    /// DrawPathUseCase（確定ストロークの保存と中継）
    pub draw_path_usecase: Arc<DrawPathUseCase>,
    /// DrawPartialPathUseCase（描画途中セグメントの中継）
    pub draw_partial_path_usecase: Arc<DrawPartialPathUseCase>,
    /// ClearPathsUseCase（キャンバスのクリア）
    pub clear_paths_usecase: Arc<ClearPathsUseCase>,
    /// AnalyzeTacticsUseCase（戦術分析）
    pub analyze_tactics_usecase: Arc<AnalyzeTacticsUseCase>,
    /// GetSessionStateUseCase（セッション状態取得）
    pub get_session_state_usecase: Arc<GetSessionStateUseCase>,
}
