use anyhow::{anyhow, Context as _, Result};
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use versebot::commands::{Dispatcher, IncomingMessage, SerenitySink};
use versebot::core::Config;
use versebot::features::BibleApiClient;
use versebot::lifecycle::shutdown_signal;

/// How long to wait for the gateway to close before exiting anyway
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);
const RATE_LIMIT_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

struct Handler {
    dispatcher: Arc<Dispatcher>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user_id().0;
        let incoming = IncomingMessage::from(&msg);
        let sink = SerenitySink::new(ctx.http.clone());

        self.dispatcher.on_message(&incoming, bot_id, &sink).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "🎉 Bot connected as {}#{:04} (ID: {})",
            ready.user.name, ready.user.discriminator, ready.user.id
        );
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🌐 Gateway version: {}", ready.version);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }

    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        info!("📦 Cache ready with {} guilds fully loaded", guilds.len());

        for guild_id in guilds {
            match ctx.cache.guild(guild_id) {
                Some(guild) => info!("Connected to guild: {} (ID: {})", guild.name, guild_id),
                None => info!("Connected to guild: <not cached> (ID: {guild_id})"),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env().context("Configuration error")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();

    info!("Starting Bible Verse Bot...");
    debug!(
        "Prefix '{}' | rate limit {} per {:?}",
        config.command_prefix, config.rate_limit_max_requests, config.rate_limit_window
    );

    let provider =
        BibleApiClient::from_config(&config).context("Failed to build verse API client")?;
    info!(
        "📖 Verse provider: {} (timeout {:?}, body cap {} bytes)",
        provider.url(),
        config.request_timeout,
        config.max_body_bytes
    );

    let dispatcher = Arc::new(Dispatcher::from_config(&config, Arc::new(provider)));

    // Forget users whose rate-limit window has expired
    if dispatcher.rate_limiter().is_enabled() {
        let prune_dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(RATE_LIMIT_PRUNE_INTERVAL);
            loop {
                interval.tick().await;
                prune_dispatcher.rate_limiter().prune();
            }
        });
    }

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler { dispatcher })
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow!("Client creation failed: {}", e)
        })?;

    let shard_manager = client.shard_manager.clone();

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");
    let mut gateway = tokio::spawn(async move { client.start().await });

    info!("Bible Verse Bot is now running. Press CTRL-C to exit.");

    tokio::select! {
        signal = shutdown_signal() => {
            info!("Received {signal}. Shutting down...");
        }
        result = &mut gateway => {
            return match result {
                Ok(Ok(())) => {
                    warn!("Gateway connection ended without a shutdown signal");
                    Ok(())
                }
                Ok(Err(why)) => {
                    error!("Gateway connection failed: {why:?}");
                    error!("This could be due to:");
                    error!("  - Invalid bot token");
                    error!("  - Network connectivity issues");
                    error!("  - Missing MESSAGE_CONTENT intent in the developer portal");
                    Err(anyhow!("Failed to establish gateway connection: {}", why))
                }
                Err(e) => Err(anyhow!("Gateway task failed: {}", e)),
            };
        }
    }

    info!("Closing Discord connection...");
    shard_manager.lock().await.shutdown_all().await;

    match tokio::time::timeout(SHUTDOWN_GRACE, gateway).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(why))) => error!("Error closing Discord connection: {why}"),
        Ok(Err(e)) => error!("Gateway task failed during shutdown: {e}"),
        Err(_) => warn!("Gateway did not close within {SHUTDOWN_GRACE:?}, dropping in-flight work"),
    }

    info!("Disconnected from Discord. Goodbye!");
    Ok(())
}
