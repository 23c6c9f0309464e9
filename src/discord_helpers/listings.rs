use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::discord_helpers::multipage_embed::{DisplayPayload, MultiPageEmbed, NavigationClick, Record};
use crate::discord_helpers::{bot_icon, error_embed, info_embed};
use crate::error::{BotError, BotResult};
use crate::{hey, nay, psst};

type RecordSource = Box<dyn Fn() -> Vec<Record> + Send + Sync>;

/// A paginated embed together with the records it pages through.
/// The records are fetched again for every render.
pub struct Listing {
    embed: MultiPageEmbed,
    source: RecordSource,
}

impl Listing {
    pub fn new<F>(embed: MultiPageEmbed, source: F) -> Self
    where
        F: Fn() -> Vec<Record> + Send + Sync + 'static,
    {
        Self {
            embed,
            source: Box::new(source),
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        self.embed.suffix()
    }

    pub fn owns(&self, custom_id: &str) -> bool {
        self.embed.owns_button(custom_id)
    }

    pub fn handle_click(&self, click: &NavigationClick) -> BotResult<DisplayPayload> {
        Ok(self.embed.navigate(&(self.source)(), click)?)
    }
}

/// All listings whose buttons the bot answers to.
#[derive(Default)]
pub struct Listings {
    listings: Vec<Listing>,
}

impl Listings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listing. A listing whose suffix is already taken replaces the old one.
    pub fn register(&mut self, listing: Listing) {
        if let Some(existing) = self
            .listings
            .iter_mut()
            .find(|existing| existing.suffix() == listing.suffix())
        {
            hey!(
                "Listing with suffix {:?} registered twice, replacing it",
                listing.suffix()
            );
            *existing = listing;
            return;
        }
        self.listings.push(listing);
    }

    pub fn find(&self, custom_id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.owns(custom_id))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn answer(&self, click: &NavigationClick) -> NavigationReply {
        let Some(listing) = self.find(&click.custom_id) else {
            return NavigationReply::Unavailable;
        };
        match listing.handle_click(click) {
            Ok(payload) => NavigationReply::Page(payload),
            Err(e) => NavigationReply::Failed(e),
        }
    }
}

/// What a navigation button click is answered with.
#[derive(Debug)]
pub enum NavigationReply {
    /// The clicked message is replaced by the next page.
    Page(DisplayPayload),
    /// No registered listing owns the button.
    Unavailable,
    Failed(BotError),
}

impl NavigationReply {
    pub fn response(&self, icon_url: Option<String>) -> CreateInteractionResponse {
        let embed = match self {
            Self::Page(payload) => return payload.update_response(),
            Self::Unavailable => info_embed("Diese Liste ist nicht mehr verfügbar.", icon_url),
            Self::Failed(e) => error_embed(
                format!("Die Seite konnte nicht angezeigt werden.\n```{}```", e),
                icon_url,
            ),
        };
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed)
                .ephemeral(true),
        )
    }
}

/// Answers a navigation button by updating the clicked message in place.
pub async fn handle_navigation(
    ctx: &Context,
    component: &ComponentInteraction,
    listings: &Listings,
) {
    let click = NavigationClick::from(component);
    psst!("Button {} clicked on {:?}", click.custom_id, click.footer);

    let reply = listings.answer(&click);
    match &reply {
        NavigationReply::Page(_) => {}
        NavigationReply::Unavailable => hey!("No listing answers to button {}", click.custom_id),
        NavigationReply::Failed(e) => {
            nay!("Failed to render page for {}: {}", click.custom_id, e)
        }
    }

    if let Err(e) = component
        .create_response(&ctx.http, reply.response(bot_icon(ctx)))
        .await
    {
        nay!("Failed to answer button {}: {}", click.custom_id, e);
    }
}
