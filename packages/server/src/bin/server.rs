//! Touchline board server.
//!
//! Relays marker moves and freehand strokes between connected boards, replays
//! finalized strokes to late joiners and serves the tactical analysis API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin touchline-server
//! cargo run --bin touchline-server -- --host 127.0.0.1 --port 3000
//! OPENROUTER_KEY=... cargo run --bin touchline-server
//! ```

use std::{collections::HashMap, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use tokio::sync::Mutex;
use touchline_server::{
    domain::StrokeHistory,
    infrastructure::{
        comment::{OpenRouterCommentGenerator, OpenRouterConfig},
        message_pusher::WebSocketMessagePusher,
        registry::InMemoryConnectionRegistry,
        repository::InMemoryStrokeHistoryRepository,
    },
    ui::{AppState, Server},
    usecase::{
        AnalyzeTacticsUseCase, ClearPathsUseCase, ConnectParticipantUseCase,
        DisconnectParticipantUseCase, DrawPartialPathUseCase, DrawPathUseCase, EventTimeline,
        GetSessionStateUseCase, RelayMovementUseCase,
    },
};
use touchline_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "touchline-server")]
#[command(about = "Live sync relay and tactical analysis server for Touchline", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "10000")]
    port: u16,

    /// Directory holding the board's static files
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// OpenRouter API key; without it the analysis uses the fallback comment
    #[arg(long, env = "OPENROUTER_KEY", hide_env_values = true)]
    openrouter_key: Option<String>,

    /// Model used for the coach comment
    #[arg(long, env = "OPENROUTER_MODEL", default_value = "gpt-4o-mini")]
    openrouter_model: String,

    /// Upper bound for one coach comment request, in seconds
    #[arg(long, env = "ANALYSIS_TIMEOUT_SECS", default_value = "10")]
    analysis_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Registry / Repository
    // 2. MessagePusher / CommentGenerator
    // 3. UseCases
    // 4. Server

    // 1. Create Registry and Repository (in-memory)
    let registry = Arc::new(InMemoryConnectionRegistry::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));
    let history = Arc::new(InMemoryStrokeHistoryRepository::new(Arc::new(Mutex::new(
        StrokeHistory::new(),
    ))));

    // 2. Create MessagePusher (WebSocket implementation) and CommentGenerator
    let message_pusher = Arc::new(WebSocketMessagePusher::new(registry.clone()));
    let comment_generator = Arc::new(OpenRouterCommentGenerator::new(OpenRouterConfig {
        api_key: args.openrouter_key,
        model: args.openrouter_model,
        timeout: Duration::from_secs(args.analysis_timeout_secs),
        ..OpenRouterConfig::default()
    }));
    if !comment_generator.has_credential() {
        tracing::warn!("OPENROUTER_KEY is not set, analysis will use the fallback comment");
    }

    // 3. Create UseCases
    let timeline = Arc::new(EventTimeline::new());
    let clock = Arc::new(SystemClock);
    let state = AppState {
        connect_participant_usecase: Arc::new(ConnectParticipantUseCase::new(
            registry.clone(),
            history.clone(),
            message_pusher.clone(),
            timeline.clone(),
        )),
        disconnect_participant_usecase: Arc::new(DisconnectParticipantUseCase::new(
            registry.clone(),
            timeline.clone(),
        )),
        relay_movement_usecase: Arc::new(RelayMovementUseCase::new(
            message_pusher.clone(),
            timeline.clone(),
        )),
        draw_path_usecase: Arc::new(DrawPathUseCase::new(
            history.clone(),
            message_pusher.clone(),
            clock.clone(),
            timeline.clone(),
        )),
        draw_partial_path_usecase: Arc::new(DrawPartialPathUseCase::new(
            message_pusher.clone(),
            clock,
            timeline.clone(),
        )),
        clear_paths_usecase: Arc::new(ClearPathsUseCase::new(
            history.clone(),
            message_pusher,
            timeline,
        )),
        analyze_tactics_usecase: Arc::new(AnalyzeTacticsUseCase::new(comment_generator)),
        get_session_state_usecase: Arc::new(GetSessionStateUseCase::new(registry, history)),
    };

    // 4. Create and run the server
    let server = Server::new(state).with_static_dir(args.static_dir);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
