use super::navigation::NavDirection;
use super::payload::decode_footer;
use super::{PaginationError, PaginationResult};

/// `ceil(record_count / page_size)`. An empty list has zero pages.
pub fn total_pages(record_count: usize, page_size: usize) -> PaginationResult<usize> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }
    Ok(record_count.div_ceil(page_size))
}

/// The records on page `page_index`. Pages past the end are empty.
pub fn slice<T>(records: &[T], page_size: usize, page_index: usize) -> PaginationResult<&[T]> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }
    let start = page_index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    Ok(&records[start..end])
}

/// Works out the 0-based page to show from the footer of the previous render.
///
/// A missing footer means there was no previous render. A footer that cannot be decoded is
/// treated as page 1. The result is always clamped to the existing pages.
pub fn resolve_current_page(
    previous_footer: Option<&str>,
    direction: Option<NavDirection>,
    total_pages: usize,
) -> usize {
    let last = total_pages.max(1) - 1;
    let shown = previous_footer
        .map(|footer| decode_footer(footer).unwrap_or(1))
        .unwrap_or(1);
    let current = (shown - 1).min(last);

    match direction {
        Some(NavDirection::Next) => (current + 1).min(last),
        Some(NavDirection::Previous) => current.saturating_sub(1),
        None => current,
    }
}
