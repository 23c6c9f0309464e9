use serenity::{
    all::{
        CommandInteraction, ComponentInteractionDataKind, Context, EventHandler, Interaction,
        OnlineStatus, Ready, ResumedEvent,
    },
    async_trait,
};

use crate::{
    commands::{self, BotCommand, ReplyState},
    discord_helpers::{
        command_error_response, command_response,
        listings::{handle_navigation, Listings},
        register_guild_commands,
    },
    hey, nay, psst, say, yay,
};

pub struct Handler {
    pub node_env: String,
    pub listings: Listings,
}

impl Handler {
    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        let command_name = command.data.name.as_str();

        // stale command from an older deployment
        let Some(bot_command) = BotCommand::from_name(command_name) else {
            hey!("{} used unknown command /{}", command.user.tag(), command_name);
            command_response(ctx, command, "Unknown command!").await;
            return;
        };

        say!("{} used /{}", command.user.tag(), command_name);

        // run the command, remembering whether it deferred
        let mut reply = ReplyState::default();
        if let Err(e) = bot_command.run(ctx, command, &mut reply).await {
            nay!("/{} failed: {}", command_name, e);
            command_error_response(ctx, command, &e.to_string(), reply.deferred).await;
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        // register commands in every guild
        let command_count = commands::all().len();
        hey!("Refreshing {} application (/) commands...", command_count);

        for guild in &ready.guilds {
            match register_guild_commands(&ctx, guild.id, commands::all()).await {
                Ok(count) => say!(
                    "{} application (/) commands loaded successfully for guild {}.",
                    count,
                    guild.id
                ),
                Err(e) => nay!("Failed to register commands for guild {}: {}", guild.id, e),
            }
        }

        // login info and presence
        say!(
            "[{}] Logged in as {} on {} servers",
            self.node_env,
            ready.user.tag(),
            ready.guilds.len()
        );
        ctx.set_presence(None, OnlineStatus::Online);


        yay!(
            "{} is connected with {} paginated listings!",
            ready.user.name,
            self.listings.len()
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        hey!("Resumed");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        psst!("Interaction event fired");

        match interaction {
            // slash commands
            Interaction::Command(command) => {
                self.handle_command(&ctx, &command).await;
            }
            // only navigation buttons are sent by the bot
            Interaction::Component(component) => match &component.data.kind {
                ComponentInteractionDataKind::Button => {
                    handle_navigation(&ctx, &component, &self.listings).await;
                }
                kind => {
                    nay!("Not handled component kind: {:?}", kind);
                }
            },
            other => {
                nay!(
                    "Not handled interaction type. This interaction is from type: {:?}.",
                    other.kind()
                );
            }
        }
    }
}
