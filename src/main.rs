use serenity::all::GatewayIntents;
use serenity::Client;

use wichtel_bot::config::ConfigSettings;
use wichtel_bot::discord_handler::Handler;
use wichtel_bot::discord_helpers::listings::Listings;
use wichtel_bot::logging;
use wichtel_bot::{hey, nay, say, yay};

#[tokio::main]
async fn main() {
    yay!("🎅 Wichtel Bot is starting up!");

    // load .env.<NODE_ENV> and read the environment
    let config = match ConfigSettings::get() {
        Ok(config) => config,
        Err(e) => {
            nay!("Failed to load environment: {}", e);
            return;
        }
    };
    logging::set_level(config.log_level);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    // create the client with the event handler
    say!("Started loading events...");
    let Ok(mut client) = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(Handler {
            node_env: config.node_env.clone(),
            listings: Listings::new(),
        })
        .await
    else {
        nay!("Error creating client");
        return;
    };

    // shut down cleanly on ctrl-c
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            hey!("Shutting down...");
            shard_manager.shutdown_all().await;
        }
    });

    // log in and run until shutdown
    if let Err(err) = client.start().await {
        nay!("Login failed: {}", err);
    }
}
