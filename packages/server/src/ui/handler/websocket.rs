//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ClientEvent, ConnectionId},
    infrastructure::dto::conversion::parse_client_event,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Register before the upgrade so the replay is the first queued message
    let connection_id = match state.connect_participant_usecase.execute(tx).await {
        Ok(connected) => connected.connection_id,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let rollback_state = state.clone();
    let rollback_id = connection_id.clone();
    Ok(ws
        .on_failed_upgrade(move |e| {
            tracing::warn!("WebSocket upgrade failed for '{}': {}", rollback_id, e);
            tokio::spawn(async move {
                if let Err(e) = rollback_state
                    .disconnect_participant_usecase
                    .execute(&rollback_id)
                    .await
                {
                    tracing::warn!("Failed to roll back registration: {}", e);
                }
            });
        })
        .on_upgrade(move |socket| handle_socket(socket, state, connection_id, rx)))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Everything addressed to this connection (replay and relayed events) flows
/// through the channel, so the socket sees them in the order they were queued.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    connection_id: ConnectionId,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    // Spawn a task to push queued messages to this connection
    let mut send_task = pusher_loop(rx, sender);

    // Spawn a task to receive events from this connection
    let recv_state = state.clone();
    let recv_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => dispatch(&recv_state, &recv_id, text.as_str()).await,
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", recv_id);
                    break;
                }
                // Ping/pong is handled by the protocol; binary frames are not part of the board protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state
        .disconnect_participant_usecase
        .execute(&connection_id)
        .await
    {
        tracing::warn!("Failed to disconnect: {}", e);
    }
}

/// Shape-check one text frame and hand it to the use case for its event.
async fn dispatch(state: &AppState, sender: &ConnectionId, text: &str) {
    let event = match parse_client_event(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Dropped frame from '{}': {}", sender, e);
            return;
        }
    };
    let name = event.name();

    let result = match event {
        ClientEvent::Movement { kind, payload } => {
            state
                .relay_movement_usecase
                .execute(sender, kind, payload)
                .await
        }
        ClientEvent::DrawPath { path, color } => {
            state.draw_path_usecase.execute(sender, path, color).await
        }
        ClientEvent::DrawPartialPath {
            points,
            color,
            last,
        } => {
            state
                .draw_partial_path_usecase
                .execute(sender, points, color, last)
                .await
        }
        ClientEvent::ClearPaths => state
            .clear_paths_usecase
            .execute(sender)
            .await
            .map(|cleared| cleared.delivered),
    };

    match result {
        Ok(delivered) => tracing::debug!(
            "Relayed '{}' from '{}' to {} connection(s)",
            name,
            sender,
            delivered
        ),
        Err(e) => tracing::warn!("Failed to relay '{}' from '{}': {}", name, sender, e),
    }
}
