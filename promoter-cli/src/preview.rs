//! Plain-text preview of the long table

use unicode_width::UnicodeWidthStr;

use crate::reshape::{OUTPUT_HEADERS, OutputTable};

/// Render up to `limit` rows as an aligned text table
pub fn render_preview(table: &OutputTable, limit: usize) -> String {
    let shown = &table.rows()[..table.len().min(limit)];

    let mut widths = OUTPUT_HEADERS.map(|h| h.width());
    for row in shown {
        for (width, field) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(field.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, OUTPUT_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, [rule[0].as_str(), rule[1].as_str(), rule[2].as_str()], &widths);
    for row in shown {
        push_line(&mut out, row.fields(), &widths);
    }

    let hidden = table.len() - shown.len();
    if hidden > 0 {
        out.push_str(&format!("... {} more rows\n", hidden));
    }
    out.push_str(&format!("{} rows total\n", table.len()));
    out
}

fn push_line(out: &mut String, fields: [&str; 3], widths: &[usize; 3]) {
    let cells: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(field, width)| format!("{}{}", field, " ".repeat(width - field.width())))
        .collect();
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}
