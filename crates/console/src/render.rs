//! Text renderings of a `GridView`.
//!
//! Both layouts read the same view; neither recomputes filtering, sorting or
//! paging.

use std::fmt::Write as _;

use bizgrid_grid::{GridView, HeaderCell, Layout, PageSummary, RowAction};
use tabled::builder::Builder;
use tabled::settings::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest cell text (in terminal columns) shown before truncation.
pub const MAX_CELL_WIDTH: usize = 32;

const NO_DATA: &str = "No data";

pub fn render(view: &GridView) -> String {
    match view.layout {
        Layout::Table => render_table(view),
        Layout::Cards => render_cards(view),
    }
}

pub fn render_table(view: &GridView) -> String {
    let actions = action_affordance(&view.actions);

    let mut builder = Builder::default();
    let mut header = vec!["#".to_string()];
    header.extend(view.headers.iter().map(header_label));
    if !actions.is_empty() {
        header.push("Actions".to_string());
    }
    builder.push_record(header);

    for row in &view.rows {
        let mut record = vec![(row.position + 1).to_string()];
        record.extend(row.cells.iter().map(|cell| truncate(&cell.text())));
        if !actions.is_empty() {
            record.push(actions.clone());
        }
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::psql());

    let mut out = String::new();
    for line in table.to_string().lines() {
        push_line(&mut out, line);
    }
    if view.is_empty() {
        push_line(&mut out, NO_DATA);
    }
    out.push_str(&footer(&view.page, &view.page_size_choices));
    out
}

pub fn render_cards(view: &GridView) -> String {
    let actions = action_affordance(&view.actions);
    let mut out = String::new();

    if view.is_empty() {
        push_line(&mut out, NO_DATA);
    }

    for row in &view.rows {
        push_line(&mut out, &format!("#{}", row.position + 1));
        for cell in &row.cells {
            let _ = writeln!(out, "  {}: {}", cell.label, truncate(&cell.text()));
        }
        if !actions.is_empty() {
            push_line(&mut out, &format!("  {actions}"));
        }
    }

    out.push_str(&footer(&view.page, &view.page_size_choices));
    out
}

fn header_label(header: &HeaderCell) -> String {
    match header.sort {
        Some(direction) => format!("{} {}", header.label, direction.indicator()),
        None => header.label.clone(),
    }
}

/// Compact controls, e.g. `[view|delete]`; empty when no handler is wired.
fn action_affordance(actions: &[RowAction]) -> String {
    if actions.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = actions.iter().map(RowAction::as_str).collect();
    format!("[{}]", names.join("|"))
}

fn footer(page: &PageSummary, choices: &[usize]) -> String {
    let sizes: Vec<String> = choices.iter().map(usize::to_string).collect();
    let mut line = format!(
        "Page {} of {} | rows {}-{} of {} | page size {} ({})",
        page.current_page,
        page.page_count,
        page.first_row,
        page.last_row,
        page.total_rows,
        page.page_size,
        sizes.join("/"),
    );
    if page.controls_enabled() {
        let nav: Vec<&str> = [(page.has_previous, "< prev"), (page.has_next, "next >")]
            .into_iter()
            .filter_map(|(enabled, label)| enabled.then_some(label))
            .collect();
        let _ = write!(line, " | {}", nav.join("  "));
    }
    line.push('\n');
    line
}

fn truncate(s: &str) -> String {
    if s.width() <= MAX_CELL_WIDTH {
        return s.to_string();
    }
    let mut cut = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > MAX_CELL_WIDTH - 1 {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
