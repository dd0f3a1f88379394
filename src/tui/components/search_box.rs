//! # SearchBox Component
//!
//! One-line search field above the country table.
//!
//! The query itself lives in the core `ListView`; the box only renders it and
//! turns key presses into [`SearchEvent`]s while it has focus.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search countries...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Input(char),
    Backspace,
    /// Leave the search box (Enter or Esc).
    Done,
}

pub struct SearchBox {
    /// Current query (Prop)
    pub query: String,
    /// Whether keystrokes go to the box (Prop)
    pub focused: bool,
}

impl SearchBox {
    pub fn new(query: String, focused: bool) -> Self {
        Self { query, focused }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => Some(SearchEvent::Input(*c)),
            TuiEvent::Backspace => Some(SearchEvent::Backspace),
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Done),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Search (/) ")
            .border_style(border_style);

        let paragraph = if self.query.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.query.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1 + self.query.width() as u16).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
