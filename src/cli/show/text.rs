use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::display::{DisplayRow, Summary};
use crate::fmt::currency;
use crate::labels::Labels;
use crate::session::Session;
use crate::view::ViewMode;

const CARD_WIDTH: usize = 40;

/// The whole ledger screen as plain text: header, banner, summary, then the
/// records in the session's current view and sort order.
pub fn render(session: &Session) -> String {
    let labels = session.labels();
    let mut out = format!(
        "{}  ({}: {})  {}",
        labels.title.bold(),
        labels.baseline,
        currency(session.baseline),
        session.count_label()
    );
    if let Some(err) = session.error() {
        out.push_str(&format!("\n{}", err.red().bold()));
    }
    out.push_str(&format!("\n\n{}", format_summary(&session.summary(), labels)));
    out.push_str(&format!(
        "\n\n{} \u{00B7} {}\n",
        session.view_label(),
        session.sort_label()
    ));

    let rows = session.display_rows();
    let body = match session.view.view_mode {
        ViewMode::Table => format_table(&rows, labels),
        ViewMode::Cards => format_cards(&rows, labels),
    };
    out.push_str(&body);
    out
}

fn remainder_text(value: &str, negative: bool) -> String {
    if negative {
        value.red().to_string()
    } else {
        value.to_string()
    }
}

pub fn format_summary(summary: &Summary, labels: &Labels) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        labels.apt1,
        labels.apt2,
        labels.total,
        labels.remainder,
        labels.piggy,
    ]);
    table.add_row(vec![
        Cell::new(&summary.share_a),
        Cell::new(&summary.share_b),
        Cell::new(&summary.total),
        Cell::new(remainder_text(&summary.remainder, summary.remainder_negative)),
        Cell::new(summary.running_accumulator.green().bold()),
    ]);
    let mut out = format!("{}\n{table}", summary.heading.bold());
    if let Some(note) = &summary.note {
        out.push_str(&format!("\n{}: {note}", labels.note));
    }
    out
}

pub fn format_table(rows: &[DisplayRow], labels: &Labels) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        labels.month,
        labels.apt1,
        labels.apt2,
        labels.total,
        labels.remainder,
        labels.piggy,
    ]);
    if rows.is_empty() {
        table.add_row(vec![Cell::new(format!("{}.", labels.no_data))]);
        return table.to_string();
    }
    for r in rows {
        table.add_row(vec![
            Cell::new(&r.period),
            Cell::new(&r.share_a),
            Cell::new(&r.share_b),
            Cell::new(&r.total),
            Cell::new(remainder_text(&r.remainder, r.remainder_negative)),
            Cell::new(&r.running_accumulator),
        ]);
    }
    table.to_string()
}

pub fn format_cards(rows: &[DisplayRow], labels: &Labels) -> String {
    if rows.is_empty() {
        return format!("{}.", labels.no_data);
    }
    let label_width = [labels.apt1, labels.apt2, labels.total, labels.remainder, labels.piggy]
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let cards: Vec<String> = rows
        .iter()
        .map(|r| {
            let mut card = format!("\u{250C}\u{2500} {}", r.period.bold());
            if !r.note.is_empty() {
                for line in textwrap::wrap(&r.note, CARD_WIDTH) {
                    card.push_str(&format!("\n\u{2502}  {}", line.italic()));
                }
            }
            let items = [
                (labels.apt1, r.share_a.clone()),
                (labels.apt2, r.share_b.clone()),
                (labels.total, r.total.clone()),
                (labels.remainder, remainder_text(&r.remainder, r.remainder_negative)),
                (labels.piggy, r.running_accumulator.clone()),
            ];
            for (label, value) in items {
                card.push_str(&format!("\n\u{2502}  {label:<label_width$}  {value}"));
            }
            card.push_str("\n\u{2514}\u{2500}");
            card
        })
        .collect();
    cards.join("\n")
}
