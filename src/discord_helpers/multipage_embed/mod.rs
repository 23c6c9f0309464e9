/*
 * Embeds with multiple traversable pages.
 * Every page is rendered into the same embed and users navigate with "Previous"/"Next" buttons.
 *
 * No state is stored between clicks: the footer of the displayed embed ("Seite P von N") is the
 * only record of the current page, so pagination survives restarts without any storage.
 * The caller supplies the records again on every click.
 */

use serde_json::Value;
use thiserror::Error;

mod navigation;
mod pager;
mod payload;
mod render;

pub use navigation::{button_id, footer_text, interpret, NavDirection, NavigationClick};
pub use pager::{resolve_current_page, slice, total_pages};
pub use payload::{decode_footer, encode_footer, DisplayPayload, NavButton, RenderedField};
pub use render::{render, render_rows};

pub const DEFAULT_COLUMN_PAGE_SIZE: usize = 5;
pub const DEFAULT_ROW_PAGE_SIZE: usize = 25;

/// One item of a paginated list. Records have no fixed schema.
pub type Record = serde_json::Map<String, Value>;

type ValueFormatter = Box<dyn Fn(&Value) -> String + Send + Sync>;
type RecordFormatter = Box<dyn Fn(&Record) -> String + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("column `{0}` needs a source field id or a full content formatter")]
    InvalidColumn(String),
}

pub type PaginationResult<T> = Result<T, PaginationError>;

/// Title and description shown above the paginated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedText {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl EmbedText {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }
}

/// A named embed field filled with one line per record of the current page.
pub struct Column {
    pub name: String,
    pub id: String,
    content: Option<ValueFormatter>,
    full_content: Option<RecordFormatter>,
}

impl Column {
    pub fn new<N: Into<String>, I: Into<String>>(name: N, id: I) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            content: None,
            full_content: None,
        }
    }

    /// Formats the value of the column's field before it is displayed.
    pub fn content<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.content = Some(Box::new(formatter));
        self
    }

    /// Formats a whole record. Takes precedence over [`Column::content`].
    pub fn full_content<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.full_content = Some(Box::new(formatter));
        self
    }

    pub fn validate(&self) -> PaginationResult<()> {
        if self.full_content.is_none() && self.id.trim().is_empty() {
            return Err(PaginationError::InvalidColumn(self.name.clone()));
        }
        Ok(())
    }

    pub(crate) fn cell(&self, record: &Record) -> String {
        if let Some(full_content) = &self.full_content {
            return full_content(record);
        }
        let value = record.get(&self.id).unwrap_or(&Value::Null);
        match &self.content {
            Some(content) => content(value),
            None => display_value(value),
        }
    }
}

/// Renders every record as its own field instead of one line per column.
pub struct RowFormat {
    name: RecordFormatter,
    value: RecordFormatter,
}

impl RowFormat {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Fn(&Record) -> String + Send + Sync + 'static,
        V: Fn(&Record) -> String + Send + Sync + 'static,
    {
        Self {
            name: Box::new(name),
            value: Box::new(value),
        }
    }

    pub(crate) fn field_name(&self, record: &Record) -> String {
        (self.name)(record)
    }

    pub(crate) fn field_value(&self, record: &Record) -> String {
        (self.value)(record)
    }
}

pub enum Layout {
    Columns(Vec<Column>),
    Rows(RowFormat),
}

/// Plain strings are shown without quotes, missing values as nothing.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A paginated embed definition. Holds no page state; see the module docs.
pub struct MultiPageEmbed {
    text: EmbedText,
    layout: Layout,
    page_size: usize,
    button_suffix: Option<String>,
}

impl MultiPageEmbed {
    pub fn columns(text: EmbedText, columns: Vec<Column>) -> Self {
        Self {
            text,
            layout: Layout::Columns(columns),
            page_size: DEFAULT_COLUMN_PAGE_SIZE,
            button_suffix: None,
        }
    }

    pub fn rows(text: EmbedText, rows: RowFormat) -> Self {
        Self {
            text,
            layout: Layout::Rows(rows),
            page_size: DEFAULT_ROW_PAGE_SIZE,
            button_suffix: None,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn button_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.button_suffix = Some(suffix.into());
        self
    }

    pub fn suffix(&self) -> Option<&str> {
        self.button_suffix.as_deref()
    }

    /// Whether a button with this custom id was rendered by this embed.
    pub fn owns_button(&self, custom_id: &str) -> bool {
        [NavDirection::Previous, NavDirection::Next]
            .into_iter()
            .any(|direction| button_id(direction, self.suffix()) == custom_id)
    }

    /// Renders the first page.
    pub fn render(&self, records: &[Record]) -> PaginationResult<DisplayPayload> {
        self.render_page(records, 0)
    }

    pub fn render_page(
        &self,
        records: &[Record],
        page_index: usize,
    ) -> PaginationResult<DisplayPayload> {
        let total = total_pages(records.len(), self.page_size)?;
        let page = slice(records, self.page_size, page_index)?;
        match &self.layout {
            Layout::Columns(columns) => render(
                &self.text,
                page,
                columns,
                page_index,
                total,
                self.suffix(),
            ),
            Layout::Rows(rows) => Ok(render_rows(
                &self.text,
                page,
                rows,
                page_index,
                total,
                self.suffix(),
            )),
        }
    }

    /// Renders the page a navigation click on a previous render of this embed leads to.
    pub fn navigate(
        &self,
        records: &[Record],
        click: &NavigationClick,
    ) -> PaginationResult<DisplayPayload> {
        match &self.layout {
            Layout::Columns(columns) => interpret(
                click,
                &self.text,
                columns,
                records,
                self.page_size,
                self.suffix(),
            ),
            Layout::Rows(_) => {
                let total = total_pages(records.len(), self.page_size)?;
                let page_index =
                    resolve_current_page(click.footer.as_deref(), click.direction(), total);
                self.render_page(records, page_index)
            }
        }
    }
}
