//! HTML rendering of pairwise comparison tables

use std::fmt::Write;

use crate::pairwise::ComparisonTable;

const CELL_STYLE: &str = "border:1px solid #ccc;padding:6px;";
const HEADER_BACKGROUND: &str = "#f0f0f0";
const UNCHANGED_BACKGROUND: &str = "#ffffff";
const DELETED_BACKGROUND: &str = "#ffd6d6";
const ADDED_BACKGROUND: &str = "#d6f5d6";

/// Render `table` as a self-contained HTML fragment.
///
/// Each pair becomes two rows, the deleted row first. Cells whose text
/// differs between the two rows are highlighted.
pub fn render_html(table: &ComparisonTable) -> String {
    let mut out = String::new();
    out.push_str("<div style='overflow-x:auto'>");
    out.push_str("<table style='border-collapse: collapse; font-size: 14px;'>\n");

    out.push_str("<tr>");
    push_header(&mut out, "Kind");
    for column in &table.columns {
        push_header(&mut out, column);
    }
    out.push_str("</tr>\n");

    for row in &table.rows {
        let _ = write!(out, "<tr><td style='{CELL_STYLE}'>deleted</td>");
        for cell in &row.cells {
            let background = if cell.changed {
                DELETED_BACKGROUND
            } else {
                UNCHANGED_BACKGROUND
            };
            push_cell(&mut out, &cell.old, background);
        }
        out.push_str("</tr>\n");

        let _ = write!(out, "<tr><td style='{CELL_STYLE}'>added</td>");
        for cell in &row.cells {
            let background = if cell.changed {
                ADDED_BACKGROUND
            } else {
                UNCHANGED_BACKGROUND
            };
            push_cell(&mut out, &cell.new, background);
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table></div>\n");
    out
}

fn push_header(out: &mut String, text: &str) {
    let _ = write!(
        out,
        "<th style='{CELL_STYLE}background-color:{HEADER_BACKGROUND}'>{}</th>",
        escape_html(text)
    );
}

fn push_cell(out: &mut String, text: &str, background: &str) {
    let _ = write!(
        out,
        "<td style='{CELL_STYLE}background-color:{background}'>{}</td>",
        escape_html(text)
    );
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
