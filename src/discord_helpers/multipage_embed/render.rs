use super::payload::{encode_footer, navigation_buttons, DisplayPayload, RenderedField};
use super::{Column, EmbedText, PaginationResult, Record, RowFormat};

// discord rejects empty field values
const PLACEHOLDER: &str = "N/A";

fn or_placeholder(value: String) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// Renders one page with a field per column, each listing the page's records line by line.
pub fn render(
    text: &EmbedText,
    page: &[Record],
    columns: &[Column],
    page_index: usize,
    total_pages: usize,
    suffix: Option<&str>,
) -> PaginationResult<DisplayPayload> {
    for column in columns {
        column.validate()?;
    }

    let fields = columns
        .iter()
        .map(|column| {
            let cells: Vec<String> = page.iter().map(|record| column.cell(record)).collect();
            let value = if cells.iter().all(|cell| cell.trim().is_empty()) {
                PLACEHOLDER.to_string()
            } else {
                cells.join("\n")
            };
            RenderedField {
                name: column.name.clone(),
                value,
                inline: true,
            }
        })
        .collect();

    Ok(DisplayPayload {
        title: text.title.clone(),
        description: text.description.clone(),
        fields,
        footer: encode_footer(page_index, total_pages),
        buttons: navigation_buttons(page_index, total_pages, suffix),
    })
}

/// Renders one page with a field per record.
pub fn render_rows(
    text: &EmbedText,
    page: &[Record],
    rows: &RowFormat,
    page_index: usize,
    total_pages: usize,
    suffix: Option<&str>,
) -> DisplayPayload {
    let fields = page
        .iter()
        .map(|record| RenderedField {
            name: or_placeholder(rows.field_name(record)),
            value: or_placeholder(rows.field_value(record)),
            inline: true,
        })
        .collect();

    DisplayPayload {
        title: text.title.clone(),
        description: text.description.clone(),
        fields,
        footer: encode_footer(page_index, total_pages),
        buttons: navigation_buttons(page_index, total_pages, suffix),
    }
}
