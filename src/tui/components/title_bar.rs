//! # TitleBar Component
//!
//! Single-line bar at the top of every screen.
//!
//! ## Conditional Formatting
//!
//! 1. **Status + cache**: `"terra /countries | 250 countries | cached 14:02:11"`
//! 2. **Status only**: `"terra /countries | Loading countries..."`
//! 3. **Default**: `"terra /countries"`
//!
//! The cache stamp comes from the shared query cache, not from the loader, so
//! it survives a failed retry.

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Current route path (e.g. "/countries")
    pub route: String,
    /// Status message (e.g. "Loading countries...")
    pub status_message: String,
    /// When the countries query was last written to the cache
    pub cached_at: Option<DateTime<Utc>>,
}

impl TitleBar {
    pub fn new(route: String, status_message: String, cached_at: Option<DateTime<Utc>>) -> Self {
        Self {
            route,
            status_message,
            cached_at,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("terra {}", self.route);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(at) = self.cached_at {
            let local: DateTime<Local> = at.with_timezone(&Local);
            text.push_str(&format!(" | cached {}", local.format("%H:%M:%S")));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Cyan)),
            area,
        );
    }
}
