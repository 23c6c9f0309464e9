use once_cell::sync::Lazy;
use regex::Regex;
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use super::navigation::{button_id, NavDirection};

static FOOTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Seite\s+(\d+)\s+von\s+\d+$").expect("footer pattern is valid"));

/// Footer text carrying the page position, e.g. `Seite 2 von 3`.
/// An empty list still reads `Seite 1 von 1`.
pub fn encode_footer(page_index: usize, total_pages: usize) -> String {
    format!("Seite {} von {}", page_index + 1, total_pages.max(1))
}

/// The 1-based page number stored by [`encode_footer`], if the text is one of its footers.
pub fn decode_footer(footer: &str) -> Option<usize> {
    let captures = FOOTER_PATTERN.captures(footer.trim())?;
    captures[1].parse::<usize>().ok().filter(|page| *page > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub custom_id: String,
    pub direction: NavDirection,
    pub disabled: bool,
}

impl NavButton {
    pub fn label(&self) -> &'static str {
        match self.direction {
            NavDirection::Previous => "Previous",
            NavDirection::Next => "Next",
        }
    }
}

/// Everything shown for one page. Built fresh on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<RenderedField>,
    pub footer: String,
    pub buttons: Vec<NavButton>,
}

impl DisplayPayload {
    pub fn page_number(&self) -> Option<usize> {
        decode_footer(&self.footer)
    }

    pub fn embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().footer(CreateEmbedFooter::new(self.footer.clone()));
        if let Some(title) = &self.title {
            embed = embed.title(title.clone());
        }
        if let Some(description) = &self.description {
            embed = embed.description(description.clone());
        }
        embed.fields(
            self.fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        )
    }

    pub fn components(&self) -> Vec<CreateActionRow> {
        if self.buttons.is_empty() {
            return Vec::new();
        }
        let buttons = self
            .buttons
            .iter()
            .map(|button| {
                CreateButton::new(button.custom_id.clone())
                    .label(button.label())
                    .style(ButtonStyle::Primary)
                    .disabled(button.disabled)
            })
            .collect();
        vec![CreateActionRow::Buttons(buttons)]
    }

    pub fn message(&self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .embed(self.embed())
            .components(self.components())
    }

    /// Response that replaces the message the clicked button belongs to.
    pub fn update_response(&self) -> CreateInteractionResponse {
        CreateInteractionResponse::UpdateMessage(self.message())
    }
}

/// No buttons for a single page, otherwise previous/next disabled at the ends.
pub(crate) fn navigation_buttons(
    page_index: usize,
    total_pages: usize,
    suffix: Option<&str>,
) -> Vec<NavButton> {
    if total_pages <= 1 {
        return Vec::new();
    }
    vec![
        NavButton {
            custom_id: button_id(NavDirection::Previous, suffix),
            direction: NavDirection::Previous,
            disabled: page_index == 0,
        },
        NavButton {
            custom_id: button_id(NavDirection::Next, suffix),
            direction: NavDirection::Next,
            disabled: page_index + 1 >= total_pages,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_round_trips_every_page() {
        for total in 1..12 {
            for index in 0..total {
                assert_eq!(decode_footer(&encode_footer(index, total)), Some(index + 1));
            }
        }
    }

    #[test]
    fn empty_list_reads_as_one_page() {
        assert_eq!(encode_footer(0, 0), "Seite 1 von 1");
    }

    #[test]
    fn foreign_footers_do_not_decode() {
        assert_eq!(decode_footer("garbage"), None);
        assert_eq!(decode_footer(""), None);
        assert_eq!(decode_footer("Secret Santa - Bei Fragen an redeagle. wenden."), None);
        assert_eq!(decode_footer("Seite 0 von 2"), None);
        assert_eq!(decode_footer("Page 2 of 3"), None);
    }

    #[test]
    fn no_buttons_for_a_single_page() {
        assert!(navigation_buttons(0, 0, Some("x")).is_empty());
        assert!(navigation_buttons(0, 1, Some("x")).is_empty());
    }

    #[test]
    fn buttons_disable_at_the_ends() {
        let first = navigation_buttons(0, 3, Some("x"));
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].custom_id, "previous_x");
        assert_eq!(first[1].custom_id, "next_x");
        assert!(first[0].disabled && !first[1].disabled);

        let middle = navigation_buttons(1, 3, Some("x"));
        assert!(!middle[0].disabled && !middle[1].disabled);

        let last = navigation_buttons(2, 3, Some("x"));
        assert!(!last[0].disabled && last[1].disabled);
    }

    #[test]
    fn components_follow_buttons() {
        let payload = DisplayPayload {
            title: None,
            description: None,
            fields: Vec::new(),
            footer: encode_footer(0, 1),
            buttons: Vec::new(),
        };
        assert!(payload.components().is_empty());
        assert_eq!(payload.page_number(), Some(1));

        let paged = DisplayPayload {
            buttons: navigation_buttons(0, 2, None),
            ..payload
        };
        assert_eq!(paged.components().len(), 1);
    }
}
