//! # DetailView Component
//!
//! Full-screen view of a single country, driven by the detail loader.
//!
//! ```text
//! ┌ France ─────────────────────────────────────┐
//! │Official name: French Republic               │
//! │Population:    67,391,582                    │
//! │Area:          551,695 km²                   │
//! │...                                          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! There is no retry here; a failed lookup stays failed until the user
//! navigates away.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::Country;
use crate::core::format;
use crate::core::loader::{DetailLoad, NOT_FOUND_MESSAGE};
use crate::tui::component::Component;

const LABEL_WIDTH: usize = 15;

pub struct DetailView<'a> {
    pub detail: &'a DetailLoad,
    /// Name from the route, used as the title while loading
    pub requested_name: &'a str,
    pub spinner: char,
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

/// Field lines for a found country.
pub fn detail_lines(country: &Country) -> Vec<Line<'static>> {
    let area = match country.area_km2 {
        Some(area) => format!("{} km²", format::group_number(area)),
        None => format::NOT_AVAILABLE.to_string(),
    };
    let mut lines = vec![
        field(
            "Official name",
            format::text_or_na(country.official_name.as_deref()),
        ),
        field("Population", format::number_or_na(country.population)),
        field("Area", area),
        field("Capital", format::capital(country)),
        field("Currencies", format::currencies_with_symbols(country)),
        field("Languages", format::languages(country)),
        field("Region", format::text_or_na(country.region.as_deref())),
        field("Subregion", format::text_or_na(country.subregion.as_deref())),
    ];
    if let Some(url) = &country.flag_image_url {
        lines.push(Line::default());
        lines.push(field("Flag", url.clone()));
        if let Some(alt) = &country.flag_alt {
            lines.push(Line::from(Span::styled(
                alt.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    }
    lines
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, body) = match self.detail {
            DetailLoad::Loading => (
                self.requested_name.to_string(),
                vec![Line::from(format!("{} Loading...", self.spinner))],
            ),
            DetailLoad::Failed(message) => (
                self.requested_name.to_string(),
                vec![Line::from(Span::styled(
                    format!("Error: {message}"),
                    Style::default().fg(Color::Red),
                ))],
            ),
            DetailLoad::NotFound => (
                self.requested_name.to_string(),
                vec![Line::from(NOT_FOUND_MESSAGE)],
            ),
            DetailLoad::Found(country) => (country.common_name.clone(), detail_lines(country)),
        };

        let block = Block::bordered()
            .title(format!(" {title} "))
            .title_bottom(" Esc back · q quit ")
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Currency;
    use crate::test_support::country;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(detail: &DetailLoad, name: &str) -> String {
        let backend = TestBackend::new(70, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = DetailView {
            detail,
            requested_name: name,
            spinner: '⠋',
        };
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_state() {
        let text = render(&DetailLoad::Loading, "France");
        assert!(text.contains("France"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_failed_state_has_no_retry_hint() {
        let text = render(&DetailLoad::Failed("Failed to fetch data".into()), "France");
        assert!(text.contains("Error: Failed to fetch data"));
        assert!(!text.contains("retry"));
    }

    #[test]
    fn test_not_found_state() {
        let text = render(&DetailLoad::NotFound, "Atlantis");
        assert!(text.contains("Atlantis"));
        assert!(text.contains("No country data found."));
    }

    #[test]
    fn test_found_state_renders_fields() {
        let mut fr = country("FR", "France");
        fr.official_name = Some("French Republic".into());
        fr.population = Some(67391582.0);
        fr.area_km2 = Some(551695.0);
        fr.capital = Some(vec!["Paris".into()]);
        fr.currencies = Some(vec![(
            "EUR".into(),
            Currency {
                name: "Euro".into(),
                symbol: Some("€".into()),
            },
        )]);
        fr.languages = Some(vec![("fra".into(), "French".into())]);
        fr.region = Some("Europe".into());
        fr.flag_image_url = Some("https://flagcdn.com/w320/fr.png".into());

        let text = render(&DetailLoad::Found(Box::new(fr)), "France");
        assert!(text.contains("French Republic"));
        assert!(text.contains("67,391,582"));
        assert!(text.contains("551,695 km²"));
        assert!(text.contains("Paris"));
        assert!(text.contains("Euro (€)"));
        assert!(text.contains("French"));
        assert!(text.contains("Europe"));
        assert!(text.contains("flagcdn.com"));
    }

    #[test]
    fn test_missing_fields_render_na() {
        let aq = country("AQ", "Antarctica");
        let lines = detail_lines(&aq);
        // No flag url, so no flag lines.
        assert_eq!(lines.len(), 8);
        let area: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(area.ends_with("N/A"));
    }
}
