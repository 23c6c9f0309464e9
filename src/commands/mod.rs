use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::error::BotResult;

pub mod ping;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Ping,
}

impl BotCommand {
    pub const ALL: [BotCommand; 1] = [BotCommand::Ping];

    pub fn name(self) -> &'static str {
        match self {
            BotCommand::Ping => "ping",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn register(self) -> CreateCommand {
        match self {
            BotCommand::Ping => ping::register(self.name()),
        }
    }

    /// Runs the command. `reply` tracks whether the interaction has already been answered.
    pub async fn run(
        self,
        ctx: &Context,
        command: &CommandInteraction,
        reply: &mut ReplyState,
    ) -> BotResult<()> {
        match self {
            BotCommand::Ping => ping::run(ctx, command, reply).await,
        }
    }
}

/// Whether a command has already deferred or answered its interaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplyState {
    pub deferred: bool,
}

impl ReplyState {
    pub fn mark_deferred(&mut self) {
        self.deferred = true;
    }
}

/// Slash commands deployed to every guild.
pub fn all() -> Vec<CreateCommand> {
    BotCommand::ALL
        .into_iter()
        .map(BotCommand::register)
        .collect()
}
