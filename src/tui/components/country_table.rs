//! # CountryTable Component
//!
//! The paginated country table plus its pager line.
//!
//! ```text
//! ┌ Countries ───────────────────────────────────────────────────┐
//! │Sel  Name         Population   Area       Capital  Currency   │
//! │[x]  France       67,391,582   551,695    Paris    Euro       │
//! │[ ]  Germany      83,240,525   357,114    Berlin   Euro       │
//! │[-]  Italy        ...                                         │
//! └──────────────────────────────────────────────────────────────┘
//!        ◀ Previous   Page 1 of 25   Next ▶
//! ```
//!
//! `[-]` marks a row that cannot be picked because two countries are already
//! selected.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::api::Country;
use crate::core::format;
use crate::core::selection::Selection;
use crate::tui::component::Component;

pub const NO_RESULTS_MESSAGE: &str = "No countries found.";
const EMPTY_PAGE_MESSAGE: &str = "No countries on this page.";

/// Checkbox glyph for a row.
pub fn checkbox(selection: &Selection, code: &str) -> &'static str {
    if selection.contains(code) {
        "[x]"
    } else if selection.can_toggle(code) {
        "[ ]"
    } else {
        "[-]"
    }
}

pub struct CountryTable<'a> {
    pub rows: &'a [&'a Country],
    pub selection: &'a Selection,
    /// Row under the cursor, relative to `rows`
    pub cursor: Option<usize>,
    /// Length of the filtered collection (all pages)
    pub filtered_len: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl CountryTable<'_> {
    fn build_row(&self, country: &Country) -> Row<'static> {
        let mark = checkbox(self.selection, &country.code);
        let mark_style = match mark {
            "[x]" => Style::default().fg(Color::Green),
            "[-]" => Style::default().fg(Color::DarkGray),
            _ => Style::default(),
        };
        Row::new(vec![
            Cell::from(Span::styled(mark, mark_style)),
            Cell::from(country.common_name.clone()),
            Cell::from(format::number_or_na(country.population)),
            Cell::from(format::number_or_na(country.area_km2)),
            Cell::from(format::capital(country)),
            Cell::from(format::currencies(country)),
        ])
    }

    fn pager_line(&self) -> Line<'static> {
        let enabled = Style::default().fg(Color::White);
        let disabled = Style::default().fg(Color::DarkGray);
        Line::from(vec![
            Span::styled("◀ Previous", if self.has_previous { enabled } else { disabled }),
            Span::raw(format!("   Page {} of {}   ", self.current_page, self.page_count)),
            Span::styled("Next ▶", if self.has_next { enabled } else { disabled }),
        ])
        .centered()
    }
}

impl Component for CountryTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [table_area, pager_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::bordered()
            .title(" Countries ")
            .border_style(Style::default().fg(Color::DarkGray));

        if self.rows.is_empty() {
            let message = if self.filtered_len == 0 {
                NO_RESULTS_MESSAGE
            } else {
                EMPTY_PAGE_MESSAGE
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, table_area);
        } else {
            let header = Row::new(vec![
                "Sel",
                "Name",
                "Population",
                "Area",
                "Capital",
                "Currency",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD));

            let rows: Vec<Row> = self.rows.iter().map(|c| self.build_row(c)).collect();
            let widths = [
                Constraint::Length(4),
                Constraint::Percentage(24),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Percentage(18),
                Constraint::Min(10),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

            let mut state = TableState::default().with_selected(self.cursor);
            frame.render_stateful_widget(table, table_area, &mut state);
        }

        frame.render_widget(Paragraph::new(self.pager_line()), pager_area);
    }
}
