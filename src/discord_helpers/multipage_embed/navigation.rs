use serenity::all::{ComponentInteraction, Embed};

use super::pager::{resolve_current_page, slice, total_pages};
use super::payload::DisplayPayload;
use super::render::render;
use super::{Column, EmbedText, PaginationResult, Record};

const PREVIOUS_MARKER: &str = "previous";
const NEXT_MARKER: &str = "next";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    fn marker(self) -> &'static str {
        match self {
            NavDirection::Previous => PREVIOUS_MARKER,
            NavDirection::Next => NEXT_MARKER,
        }
    }

    /// Reads the direction out of a button id such as `next_<suffix>`.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        // the prefix decides first, so a suffix containing a marker can't flip the direction
        [NavDirection::Previous, NavDirection::Next]
            .into_iter()
            .find(|direction| custom_id.starts_with(direction.marker()))
            .or_else(|| {
                [NavDirection::Next, NavDirection::Previous]
                    .into_iter()
                    .find(|direction| custom_id.contains(direction.marker()))
            })
    }
}

/// `previous_<suffix>` / `next_<suffix>`, or just the marker without a suffix.
pub fn button_id(direction: NavDirection, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{}_{}", direction.marker(), suffix),
        None => direction.marker().to_string(),
    }
}

/// What a button click tells us: which button, and the footer of the message it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationClick {
    pub custom_id: String,
    pub footer: Option<String>,
}

impl NavigationClick {
    pub fn new<S: Into<String>>(custom_id: S, footer: Option<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            footer,
        }
    }

    pub fn direction(&self) -> Option<NavDirection> {
        NavDirection::from_custom_id(&self.custom_id)
    }
}

/// Footer text of the first embed of a message, where the current page is recorded.
pub fn footer_text(embeds: &[Embed]) -> Option<String> {
    embeds
        .first()
        .and_then(|embed| embed.footer.as_ref())
        .map(|footer| footer.text.clone())
}

impl From<&ComponentInteraction> for NavigationClick {
    fn from(component: &ComponentInteraction) -> Self {
        Self::new(
            component.data.custom_id.clone(),
            footer_text(&component.message.embeds),
        )
    }
}

/// Renders the page a click leads to, recovering the current page from the clicked message.
pub fn interpret(
    click: &NavigationClick,
    text: &EmbedText,
    columns: &[Column],
    records: &[Record],
    page_size: usize,
    suffix: Option<&str>,
) -> PaginationResult<DisplayPayload> {
    let total = total_pages(records.len(), page_size)?;
    let page_index = resolve_current_page(click.footer.as_deref(), click.direction(), total);
    let page = slice(records, page_size, page_index)?;
    render(text, page, columns, page_index, total, suffix)
}

#[cfg(test)]
mod tests {
    use super::super::test_records::numbered;
    use super::*;
    use crate::discord_helpers::multipage_embed::PaginationError;
    use serde_json::json;

    fn embed(value: serde_json::Value) -> Embed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn footer_comes_from_the_first_embed() {
        assert_eq!(footer_text(&[]), None);

        let without_footer = embed(json!({ "title": "Teilnehmer", "fields": [] }));
        assert_eq!(footer_text(&[without_footer]), None);

        let paged = embed(json!({
            "title": "Teilnehmer",
            "fields": [],
            "footer": { "text": "Seite 2 von 3" }
        }));
        let other = embed(json!({ "fields": [], "footer": { "text": "Seite 9 von 9" } }));
        assert_eq!(
            footer_text(&[paged, other]),
            Some("Seite 2 von 3".to_string())
        );
    }

    #[test]
    fn click_from_message_without_embeds_starts_over() {
        let click = NavigationClick::new("next_x", footer_text(&[]));
        let payload = interpret(
            &click,
            &EmbedText::default(),
            &columns(),
            &numbered(12),
            5,
            Some("x"),
        )
        .unwrap();
        assert_eq!(payload.footer, "Seite 2 von 3");
    }

    fn columns() -> Vec<Column> {
        vec![Column::new("Name", "name")]
    }

    fn click(id: &str, footer: Option<&str>) -> NavigationClick {
        NavigationClick::new(id, footer.map(str::to_string))
    }

    #[test]
    fn reads_direction_from_button_id() {
        assert_eq!(
            NavDirection::from_custom_id("next_x"),
            Some(NavDirection::Next)
        );
        assert_eq!(
            NavDirection::from_custom_id("previous_x"),
            Some(NavDirection::Previous)
        );
        assert_eq!(
            NavDirection::from_custom_id("previous_next_round"),
            Some(NavDirection::Previous)
        );
        assert_eq!(
            NavDirection::from_custom_id("page_next"),
            Some(NavDirection::Next)
        );
        assert_eq!(NavDirection::from_custom_id("cancel"), None);
    }

    #[test]
    fn button_ids_embed_the_suffix() {
        assert_eq!(button_id(NavDirection::Next, Some("x")), "next_x");
        assert_eq!(button_id(NavDirection::Previous, Some("x")), "previous_x");
        assert_eq!(button_id(NavDirection::Next, None), "next");
    }

    #[test]
    fn next_click_advances_one_page() {
        let records = numbered(12);
        let payload = interpret(
            &click("next_x", Some("Seite 1 von 3")),
            &EmbedText::default(),
            &columns(),
            &records,
            5,
            Some("x"),
        )
        .unwrap();
        assert_eq!(payload.footer, "Seite 2 von 3");
        assert_eq!(payload.buttons[0].custom_id, "previous_x");
    }

    #[test]
    fn missing_footer_starts_fresh() {
        let records = numbered(12);
        let payload = interpret(
            &click("refresh_x", None),
            &EmbedText::default(),
            &columns(),
            &records,
            5,
            Some("x"),
        )
        .unwrap();
        assert_eq!(payload.footer, "Seite 1 von 3");
    }

    #[test]
    fn garbage_footer_is_page_one() {
        let records = numbered(12);
        let payload = interpret(
            &click("previous_x", Some("garbage")),
            &EmbedText::default(),
            &columns(),
            &records,
            5,
            Some("x"),
        )
        .unwrap();
        assert_eq!(payload.footer, "Seite 1 von 3");
        assert!(payload.buttons[0].disabled);
    }

    #[test]
    fn next_on_last_page_stays() {
        let records = numbered(12);
        let payload = interpret(
            &click("next_x", Some("Seite 3 von 3")),
            &EmbedText::default(),
            &columns(),
            &records,
            5,
            Some("x"),
        )
        .unwrap();
        assert_eq!(payload.footer, "Seite 3 von 3");
        assert_eq!(payload.fields[0].value, "user10\nuser11");
    }

    #[test]
    fn invalid_arguments_are_raised() {
        let records = numbered(3);
        let result = interpret(
            &click("next_x", None),
            &EmbedText::default(),
            &columns(),
            &records,
            0,
            Some("x"),
        );
        assert_eq!(result.unwrap_err(), PaginationError::InvalidPageSize);
    }
}
