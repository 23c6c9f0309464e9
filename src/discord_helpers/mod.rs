use serenity::all::{
    Colour, CommandInteraction, CreateCommand, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, GuildId, Timestamp,
};
use serenity::client::Context;

use crate::nay;

pub mod listings;
pub mod multipage_embed;

const BOT_NAME: &str = "Secret Santa";
const BASE_FOOTER: &str = "Secret Santa - Bei Fragen an redeagle. wenden.";

/// Author, footer and timestamp shared by the bot's status embeds.
pub fn base_embed(icon_url: Option<String>) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(BOT_NAME);
    if let Some(icon_url) = icon_url {
        author = author.icon_url(icon_url);
    }
    CreateEmbed::new()
        .author(author)
        .footer(CreateEmbedFooter::new(BASE_FOOTER))
        .timestamp(Timestamp::now())
}

pub fn error_embed<S: Into<String>>(error: S, icon_url: Option<String>) -> CreateEmbed {
    base_embed(icon_url)
        .title("❌ Fehler")
        .description(error)
        .color(Colour::RED)
}

pub fn success_embed<S: Into<String>>(message: S, icon_url: Option<String>) -> CreateEmbed {
    base_embed(icon_url)
        .title("✅ Erfolg")
        .description(message)
        .color(Colour::DARK_GREEN)
}

pub fn info_embed<S: Into<String>>(message: S, icon_url: Option<String>) -> CreateEmbed {
    base_embed(icon_url)
        .title(":information_source: Info")
        .description(message)
        .color(Colour::BLUE)
}

/// Avatar of the logged in bot, or the default avatar when it has none.
pub fn bot_icon(ctx: &Context) -> Option<String> {
    Some(ctx.cache.current_user().face())
}

pub async fn command_response<S: Into<String>>(
    ctx: &Context,
    command: &CommandInteraction,
    msg: S,
) {
    let data = CreateInteractionResponseMessage::new().content(msg.into());
    let builder = CreateInteractionResponse::Message(data);
    if let Err(err) = command.create_response(&ctx.http, builder).await {
        nay!("Failed to respond to command: {}", err)
    }
}

/// How an ephemeral embed reaches the user, depending on whether the interaction was answered.
pub enum EphemeralReply {
    Followup(CreateInteractionResponseFollowup),
    Response(CreateInteractionResponse),
}

impl EphemeralReply {
    pub fn new(embed: CreateEmbed, deferred: bool) -> Self {
        if deferred {
            Self::Followup(
                CreateInteractionResponseFollowup::new()
                    .embed(embed)
                    .ephemeral(true),
            )
        } else {
            Self::Response(CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ))
        }
    }
}

pub fn command_error_embed(error: &str, icon_url: Option<String>) -> CreateEmbed {
    error_embed(
        format!(
            "Ein Fehler ist aufgetreten. Bitte erstelle einen Screenshot und leite ihn an **redeagle.** weiter.\n```{}```",
            error
        ),
        icon_url,
    )
}

/// Shows an error embed for a failed command, as a follow-up when the command already deferred.
pub async fn command_error_response(
    ctx: &Context,
    command: &CommandInteraction,
    error: &str,
    deferred: bool,
) {
    let embed = command_error_embed(error, bot_icon(ctx));

    let result = match EphemeralReply::new(embed, deferred) {
        EphemeralReply::Followup(followup) => command
            .create_followup(&ctx.http, followup)
            .await
            .map(|_| ()),
        EphemeralReply::Response(response) => command.create_response(&ctx.http, response).await,
    };

    if let Err(e) = result {
        nay!("Failed to send error response: {}", e);
    }
}

/// Replaces the guild's application commands with `commands`.
pub async fn register_guild_commands(
    ctx: &Context,
    guild: GuildId,
    commands: Vec<CreateCommand>,
) -> serenity::Result<usize> {
    let registered = guild.set_commands(&ctx.http, commands).await?;
    Ok(registered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const ICON: &str = "https://cdn.discordapp.com/avatars/1/abc.png";

    fn json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn base_embed_carries_author_icon() {
        let embed = json(base_embed(Some(ICON.to_string())));
        assert_eq!(embed["author"]["name"], BOT_NAME);
        assert_eq!(embed["author"]["icon_url"], ICON);
        assert_eq!(embed["footer"]["text"], BASE_FOOTER);

        let embed = json(base_embed(None));
        assert_eq!(embed["author"]["name"], BOT_NAME);
        assert!(embed["author"]["icon_url"].is_null());
    }

    #[test]
    fn status_embeds_have_title_and_colour() {
        let success = json(success_embed("Gespeichert", Some(ICON.to_string())));
        assert_eq!(success["title"], "✅ Erfolg");
        assert_eq!(success["description"], "Gespeichert");
        assert_eq!(success["color"], Colour::DARK_GREEN.0);
        assert_eq!(success["author"]["icon_url"], ICON);

        let error = json(error_embed("kaputt", None));
        assert_eq!(error["title"], "❌ Fehler");
        assert_eq!(error["color"], Colour::RED.0);

        let info = json(info_embed("Hinweis", None));
        assert_eq!(info["title"], ":information_source: Info");
        assert_eq!(info["color"], Colour::BLUE.0);
    }

    #[test]
    fn command_error_embed_quotes_the_error() {
        let embed = json(command_error_embed("Unknown interaction", None));
        let description = embed["description"].as_str().unwrap();
        assert!(description.ends_with("```Unknown interaction```"));
    }

    #[test]
    fn deferred_commands_get_a_followup() {
        let embed = command_error_embed("x", None);
        assert!(matches!(
            EphemeralReply::new(embed.clone(), true),
            EphemeralReply::Followup(_)
        ));
        assert!(matches!(
            EphemeralReply::new(embed, false),
            EphemeralReply::Response(CreateInteractionResponse::Message(_))
        ));
    }
}
