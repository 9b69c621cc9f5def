use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::DisplayRow;
use crate::fmt::currency;
use crate::labels::Labels;
use crate::session::Session;
use crate::tui::{amount_span, TuiView, ViewAction, ERROR_STYLE, FOOTER_STYLE, HEADER_STYLE, PIGGY_STYLE};
use crate::view::ViewMode;

const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);
const HEADER_ROW_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
const NOTE_STYLE: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::ITALIC);

/// Interactive ledger screen: summary panel on top, records below as a
/// table or as cards. `v` and `s` flip the toggles, `r` reloads the file.
pub struct LedgerView {
    session: Session,
    rows: Vec<DisplayRow>,
    offset: usize,
    visible_count: usize,
}

impl LedgerView {
    pub fn new(session: Session) -> Self {
        let rows = session.display_rows();
        Self {
            session,
            rows,
            offset: 0,
            visible_count: 20,
        }
    }

    /// Re-derive display rows after a toggle or reload. Canonical data is
    /// only re-read on reload.
    fn refresh(&mut self) {
        self.rows = self.session.display_rows();
        self.offset = 0;
    }

    fn toggle_view(&mut self) {
        self.session.view.toggle_view();
        self.refresh();
    }

    fn toggle_sort(&mut self) {
        self.session.view.toggle_sort();
        self.refresh();
    }

    /// Scrollable lines for the current view mode.
    fn content_len(&self) -> usize {
        match self.session.view.view_mode {
            ViewMode::Table => self.rows.len(),
            ViewMode::Cards => card_lines(&self.rows, self.session.labels()).len(),
        }
    }

    fn max_offset(&self) -> usize {
        self.content_len().saturating_sub(self.visible_count)
    }

    fn draw_summary(&self) -> Vec<Line<'static>> {
        let labels = self.session.labels();
        let s = self.session.summary();
        let mut lines = vec![
            Line::from(Span::styled(s.heading.clone(), BOLD)),
            Line::from(vec![
                Span::raw(format!("{} {}   ", labels.apt1, s.share_a)),
                Span::raw(format!("{} {}   ", labels.apt2, s.share_b)),
                Span::raw(format!("{} {}   ", labels.total, s.total)),
                Span::raw(format!("{} ", labels.remainder)),
                amount_span(s.remainder.clone(), s.remainder_negative),
                Span::raw(format!("   {} ", labels.piggy)),
                Span::styled(s.running_accumulator.clone(), PIGGY_STYLE.add_modifier(Modifier::BOLD)),
            ]),
        ];
        if let Some(note) = s.note {
            lines.push(Line::from(Span::styled(note, NOTE_STYLE)));
        }
        lines
    }

    fn draw_table(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let labels = self.session.labels();
        let header = Row::new([
            labels.month,
            labels.apt1,
            labels.apt2,
            labels.total,
            labels.remainder,
            labels.piggy,
        ])
        .style(HEADER_ROW_STYLE)
        .bottom_margin(1);
        let widths = [
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Fill(1),
        ];

        let rows: Vec<Row> = if self.rows.is_empty() {
            vec![Row::new([Cell::from(format!("{}.", labels.no_data))])]
        } else {
            self.rows
                .iter()
                .skip(self.offset)
                .take(self.visible_count)
                .map(|r| {
                    Row::new([
                        Cell::from(r.period.clone()),
                        Cell::from(r.share_a.clone()),
                        Cell::from(r.share_b.clone()),
                        Cell::from(r.total.clone()),
                        Cell::from(amount_span(r.remainder.clone(), r.remainder_negative)),
                        Cell::from(Span::styled(r.running_accumulator.clone(), PIGGY_STYLE)),
                    ])
                })
                .collect()
        };

        let table = Table::new(rows, widths).header(header).column_spacing(2);
        frame.render_widget(table, area);
    }

    fn draw_cards(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = card_lines(&self.rows, self.session.labels())
            .into_iter()
            .skip(self.offset)
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Cards flattened into display lines so they scroll like table rows.
fn card_lines(rows: &[DisplayRow], labels: &Labels) -> Vec<Line<'static>> {
    if rows.is_empty() {
        return vec![Line::from(format!("{}.", labels.no_data))];
    }
    let mut lines = Vec::new();
    for r in rows {
        let mut top = vec![Span::styled(r.period.clone(), HEADER_STYLE)];
        if !r.note.is_empty() {
            top.push(Span::raw("  "));
            top.push(Span::styled(r.note.clone(), NOTE_STYLE));
        }
        lines.push(Line::from(top));
        lines.push(Line::from(vec![
            Span::raw(format!("  {} {}   {} {}   {} {}", labels.apt1, r.share_a, labels.apt2, r.share_b, labels.total, r.total)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", labels.remainder)),
            amount_span(r.remainder.clone(), r.remainder_negative),
            Span::raw(format!("   {} ", labels.piggy)),
            Span::styled(r.running_accumulator.clone(), PIGGY_STYLE),
        ]));
        lines.push(Line::default());
    }
    lines
}

impl TuiView for LedgerView {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let summary = self.draw_summary();
        let banner_height = u16::from(self.session.error().is_some());
        let [header_area, banner_area, summary_area, sep_area, content_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(banner_height),
                Constraint::Length(summary.len() as u16),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let labels = self.session.labels();
        frame.render_widget(
            Paragraph::new(format!(
                " {}  {}: {}  {}  \u{00B7}  {}  \u{00B7}  {}",
                labels.title,
                labels.baseline,
                currency(self.session.baseline),
                self.session.count_label(),
                self.session.view_label(),
                self.session.sort_label(),
            ))
            .style(HEADER_STYLE),
            header_area,
        );

        if let Some(err) = self.session.error() {
            frame.render_widget(Paragraph::new(format!(" {err}")).style(ERROR_STYLE), banner_area);
        }

        frame.render_widget(Paragraph::new(summary), summary_area);

        frame.render_widget(
            Paragraph::new("━".repeat(area.width as usize)).style(FOOTER_STYLE),
            sep_area,
        );

        let overhead = match self.session.view.view_mode {
            ViewMode::Table => 2u16,
            ViewMode::Cards => 0,
        };
        self.visible_count = (content_area.height.saturating_sub(overhead) as usize).max(1);
        self.offset = self.offset.min(self.max_offset());

        match self.session.view.view_mode {
            ViewMode::Table => self.draw_table(frame, content_area),
            ViewMode::Cards => self.draw_cards(frame, content_area),
        }

        let len = self.content_len();
        let pos_info = if len > self.visible_count {
            format!("  line {}/{}", self.offset + 1, len)
        } else {
            String::new()
        };
        frame.render_widget(
            Paragraph::new(format!(
                " v=view  s=sort  r=reload  \u{2191}/\u{2193}=scroll  q/Esc=close{pos_info}"
            ))
            .style(FOOTER_STYLE),
            footer_area,
        );
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        let page = self.visible_count;
        let max = self.max_offset();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Char('v') => self.toggle_view(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('r') => return ViewAction::Reload,
            KeyCode::Up | KeyCode::Char('k') => {
                self.offset = self.offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.offset = (self.offset + 1).min(max);
            }
            KeyCode::PageUp => {
                self.offset = self.offset.saturating_sub(page);
            }
            KeyCode::PageDown => {
                self.offset = (self.offset + page).min(max);
            }
            KeyCode::Home => {
                self.offset = 0;
            }
            KeyCode::End => {
                self.offset = max;
            }
            _ => {}
        }
        ViewAction::Continue
    }

    fn reload(&mut self) {
        // A failure is already reflected in the session banner.
        let _ = self.session.reload();
        self.refresh();
    }
}
