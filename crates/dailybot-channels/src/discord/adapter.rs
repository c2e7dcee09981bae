//! serenity implementation of the chat platform

use super::config::DiscordConfig;
use super::errors::{classify_lookup_error, classify_serenity_error};
use super::handler::ReadyHandler;
use dailybot_core::{
    ChannelInfo, ChatPlatform, Error, MessageHandle, PostPayload, Result, ThreadArchive,
    ThreadHandle,
};
use serenity::all::{
    AutoArchiveDuration, ChannelId, ChannelType, Client, CreateAllowedMentions, CreateEmbed,
    CreateEmbedFooter, CreateMessage, CreateThread, GatewayIntents, MessageId, RoleId,
};
use serenity::gateway::ShardManager;
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Live gateway connection
struct GatewaySession {
    http: Arc<Http>,
    shard_manager: Arc<ShardManager>,
    gateway: JoinHandle<serenity::Result<()>>,
}

/// Discord bot adapter
pub struct DiscordAdapter {
    config: DiscordConfig,
    session: Mutex<Option<GatewaySession>>,
}

impl DiscordAdapter {
    /// Create a new Discord adapter
    #[must_use]
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    async fn http(&self) -> Result<Arc<Http>> {
        self.session
            .lock()
            .await
            .as_ref()
            .map(|s| s.http.clone())
            .ok_or_else(|| Error::PlatformTransport("Not connected".to_string()))
    }
}

/// Build the channel message for a problem post
pub fn build_post_message(payload: &PostPayload) -> CreateMessage {
    let embed = CreateEmbed::new()
        .title(&payload.title)
        .url(&payload.url)
        .colour(payload.color)
        .description(&payload.description)
        .field(&payload.field_name, &payload.field_value, true)
        .footer(CreateEmbedFooter::new(&payload.footer));

    let mentions = CreateAllowedMentions::new()
        .roles(payload.mention_roles.iter().copied().map(RoleId::new));

    let mut builder = CreateMessage::new().embed(embed).allowed_mentions(mentions);
    if let Some(content) = payload.content() {
        builder = builder.content(content);
    }
    builder
}

fn archive_duration(archive: ThreadArchive) -> AutoArchiveDuration {
    match archive {
        ThreadArchive::OneHour => AutoArchiveDuration::OneHour,
        ThreadArchive::OneDay => AutoArchiveDuration::OneDay,
        ThreadArchive::ThreeDays => AutoArchiveDuration::ThreeDays,
        ThreadArchive::OneWeek => AutoArchiveDuration::OneWeek,
    }
}

#[async_trait::async_trait]
impl ChatPlatform for DiscordAdapter {
    #[instrument(skip(self))]
    async fn connect(&self) -> Result<()> {
        let mut session = self.session.lock().await;
        if session.is_some() {
            return Ok(());
        }

        info!("Starting Discord client");

        let (ready_tx, ready_rx) = oneshot::channel();
        let mut client = Client::builder(self.config.token(), GatewayIntents::GUILDS)
            .event_handler(ReadyHandler::new(ready_tx))
            .await
            .map_err(classify_serenity_error)?;

        let http = client.http.clone();
        let shard_manager = client.shard_manager.clone();
        let mut gateway = tokio::spawn(async move { client.start().await });

        tokio::select! {
            ready = ready_rx => {
                if ready.is_err() {
                    shard_manager.shutdown_all().await;
                    gateway.abort();
                    return Err(Error::PlatformTransport(
                        "gateway closed before ready".to_string(),
                    ));
                }
            }
            finished = &mut gateway => {
                return Err(match finished {
                    Ok(Ok(())) => {
                        Error::PlatformTransport("gateway stopped before ready".to_string())
                    }
                    Ok(Err(e)) => classify_serenity_error(e),
                    Err(e) => Error::Unexpected(format!("gateway task failed: {}", e)),
                });
            }
        }

        *session = Some(GatewaySession {
            http,
            shard_manager,
            gateway,
        });
        Ok(())
    }

    #[instrument(skip(self))]
    async fn resolve_channel(&self, channel_id: u64) -> Result<ChannelInfo> {
        if channel_id == 0 {
            return Err(Error::ChannelNotFound("channel id 0".to_string()));
        }

        let http = self.http().await?;
        let channel = ChannelId::new(channel_id)
            .to_channel(&http)
            .await
            .map_err(|e| classify_lookup_error(e, channel_id))?;

        match channel.guild() {
            Some(gc) if matches!(gc.kind, ChannelType::Text | ChannelType::News) => {
                Ok(ChannelInfo {
                    id: gc.id.get(),
                    name: gc.name.clone(),
                })
            }
            Some(gc) => Err(Error::ChannelNotFound(format!(
                "channel {} is a {:?} channel, not a text channel",
                channel_id, gc.kind
            ))),
            None => Err(Error::ChannelNotFound(format!(
                "channel {} is not a guild channel",
                channel_id
            ))),
        }
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    async fn send_post(&self, channel_id: u64, payload: &PostPayload) -> Result<MessageHandle> {
        let http = self.http().await?;

        let sent = ChannelId::new(channel_id)
            .send_message(&http, build_post_message(payload))
            .await
            .map_err(classify_serenity_error)?;

        debug!(message_id = sent.id.get(), "Problem post sent");
        Ok(MessageHandle {
            channel_id,
            message_id: sent.id.get(),
        })
    }

    #[instrument(skip(self, message), fields(message_id = message.message_id))]
    async fn create_thread(
        &self,
        message: &MessageHandle,
        title: &str,
        archive: ThreadArchive,
    ) -> Result<ThreadHandle> {
        let http = self.http().await?;

        let builder = CreateThread::new(title).auto_archive_duration(archive_duration(archive));
        let thread = ChannelId::new(message.channel_id)
            .create_thread_from_message(&http, MessageId::new(message.message_id), builder)
            .await
            .map_err(classify_serenity_error)?;

        debug!(thread_id = thread.id.get(), "Discussion thread created");
        Ok(ThreadHandle {
            thread_id: thread.id.get(),
            name: thread.name.clone(),
        })
    }

    async fn send_text(&self, channel_id: u64, text: &str) -> Result<()> {
        let http = self.http().await?;

        ChannelId::new(channel_id)
            .send_message(&http, CreateMessage::new().content(text))
            .await
            .map_err(classify_serenity_error)?;

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let Some(session) = self.session.lock().await.take() else {
            return Ok(());
        };

        info!("Shutting down Discord client");
        session.shard_manager.shutdown_all().await;
        session.gateway.abort();
        if let Err(e) = session.gateway.await {
            if !e.is_cancelled() {
                warn!(error = %e, "Discord gateway task ended abnormally");
            }
        }
        Ok(())
    }
}
