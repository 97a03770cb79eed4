//! Plain-text rendering of a [`RenderSurface`].

use std::fmt::Write as _;

use relist_engine::RenderSurface;
use relist_types::{CardRow, ColumnKind, ColumnSpec, RawRecord, ViewRow, display_value};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub fn render_text(surface: &RenderSurface) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", surface.card_title);

    if let Some(error) = &surface.error {
        let _ = writeln!(out, "Error: {}", error);
        return out;
    }
    if surface.no_records_no_error {
        let _ = writeln!(out, "No related records.");
        return out;
    }
    if surface.is_collapsed {
        let _ = writeln!(out, "({} records, collapsed)", surface.total_rows);
        return out;
    }

    let tables: Vec<&RawRecord> = surface.rows.iter().filter_map(ViewRow::as_table).collect();
    if !tables.is_empty() {
        out.push_str(&render_table(&surface.columns, &tables));
    }
    for card in surface.rows.iter().filter_map(ViewRow::as_card) {
        out.push_str(&render_card(card));
    }

    let _ = writeln!(out, "Showing {} of {}", surface.rows.len(), surface.total_rows);
    if surface.can_show_more {
        let _ = writeln!(out, "[{}]", surface.toggle_label);
    }
    out
}

fn cell_text(column: &ColumnSpec, row: &RawRecord) -> String {
    let value = |field: &str| row.get(field).map(display_value).unwrap_or_default();
    match (&column.kind, &column.type_attributes) {
        (ColumnKind::Url, Some(attrs)) => format!("{} <{}>", value(&attrs.label.field_name), value(&column.field_name)),
        _ => value(&column.field_name),
    }
}

fn render_table(columns: &[ColumnSpec], rows: &[&RawRecord]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|column| cell_text(column, row)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].width())
                .chain(std::iter::once(column.label.width()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|column| column.label.as_str()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell.as_ref(), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn render_card(card: &CardRow) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "* {} <{}>", display_value(&card.title), card.url);
    for field in &card.fields {
        let marker = if field.is_image == Some(true) { " (image)" } else { "" };
        let _ = writeln!(out, "    {}: {}{}", field.label, display_value(&field.value), marker);
    }
    out
}
