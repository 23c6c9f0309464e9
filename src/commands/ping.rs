use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, EditInteractionResponse,
    InteractionId,
};

use crate::commands::ReplyState;
use crate::error::BotResult;

// 2015-01-01T00:00:00Z, the start of discord snowflake time
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Milliseconds since the unix epoch at which the snowflake was created.
pub fn snowflake_created_ms(id: InteractionId) -> i64 {
    ((id.get() >> 22) + DISCORD_EPOCH_MS) as i64
}

/// Time between the interaction being created and `now_ms`, or -1 for a timestamp in the future.
pub fn latency_ms(created_ms: i64, now_ms: i64) -> i64 {
    if created_ms > now_ms {
        -1
    } else {
        now_ms - created_ms
    }
}

pub fn latency_embed(latency: i64) -> CreateEmbed {
    CreateEmbed::new().description(format!(
        "⌛️ Pong! Mein Ping zu Discord ist **{}ms**.",
        latency
    ))
}

pub async fn run(
    ctx: &Context,
    cmd: &CommandInteraction,
    reply: &mut ReplyState,
) -> BotResult<()> {
    cmd.defer_ephemeral(&ctx.http).await?;
    reply.mark_deferred();

    let latency = latency_ms(snowflake_created_ms(cmd.id), Utc::now().timestamp_millis());

    cmd.edit_response(
        &ctx.http,
        EditInteractionResponse::new().embed(latency_embed(latency)),
    )
    .await?;
    Ok(())
}

pub fn register(name: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description("Zeigt die Latenz zum Discord-Server an.")
        .dm_permission(true)
}
