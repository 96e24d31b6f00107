//! Table rendering

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// A table with `headers`, right-aligned after the first column
pub(crate) fn table<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.into_iter().map(|h| Cell::new(h.into())));
    table
}

pub(crate) fn name(value: &str) -> Cell {
    Cell::new(value)
}

pub(crate) fn score(value: f64) -> Cell {
    Cell::new(format!("{:.4}", value)).set_alignment(CellAlignment::Right)
}

pub(crate) fn flag(value: bool) -> Cell {
    Cell::new(if value { "yes" } else { "no" }).set_alignment(CellAlignment::Center)
}
