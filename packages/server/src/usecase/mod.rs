//! UseCase 層
//!
//! ボードのイベントごとに 1 つのユースケースを持つ。
//! 履歴と接続を触るユースケースは `EventTimeline` で 1 イベントずつ直列化される。

pub mod analyze_tactics;
pub mod clear_paths;
pub mod connect_participant;
pub mod disconnect_participant;
pub mod draw_partial_path;
pub mod draw_path;
pub mod error;
pub mod get_session_state;
pub mod relay_movement;
pub mod timeline;

#[cfg(test)]
pub(crate) mod fixture;

pub use analyze_tactics::AnalyzeTacticsUseCase;
pub use clear_paths::{ClearPathsUseCase, Cleared};
pub use connect_participant::{ConnectParticipantUseCase, Connected};
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use draw_partial_path::DrawPartialPathUseCase;
pub use draw_path::DrawPathUseCase;
pub use error::{AnalyzeError, ConnectError, DisconnectError, RelayError};
pub use get_session_state::{GetSessionStateUseCase, SessionState};
pub use relay_movement::RelayMovementUseCase;
pub use timeline::EventTimeline;
