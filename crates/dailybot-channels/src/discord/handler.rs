//! Gateway event handler

use serenity::all::{Context, EventHandler, Ready};
use tokio::sync::{oneshot, Mutex};
use tracing::info;

/// Gateway event handler that reports the one-time `ready` event
pub struct ReadyHandler {
    ready_tx: Mutex<Option<oneshot::Sender<String>>>,
}

impl ReadyHandler {
    /// Create a handler that sends the bot's user name once the gateway is ready
    pub fn new(ready_tx: oneshot::Sender<String>) -> Self {
        Self {
            ready_tx: Mutex::new(Some(ready_tx)),
        }
    }
}

#[serenity::async_trait]
impl EventHandler for ReadyHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let discriminator = ready
            .user
            .discriminator
            .map(|d| format!("#{}", d))
            .unwrap_or_default();
        info!(
            "Discord bot connected as {}{}",
            ready.user.name, discriminator
        );

        // Reconnects fire `ready` again; only the first one matters.
        if let Some(tx) = self.ready_tx.lock().await.take() {
            let _ = tx.send(ready.user.name.clone());
        }
    }
}
