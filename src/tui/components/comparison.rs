//! # Comparison Panel
//!
//! Side-by-side table for the two selected countries. Only drawn when the
//! selection is full.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Row, Table};

use crate::api::Country;
use crate::core::format;
use crate::tui::component::Component;

/// Header row + five feature rows + borders.
pub const COMPARISON_HEIGHT: u16 = 8;

pub struct Comparison<'a> {
    pub left: &'a Country,
    pub right: &'a Country,
}

impl<'a> Comparison<'a> {
    pub fn new(pair: (&'a Country, &'a Country)) -> Self {
        Self {
            left: pair.0,
            right: pair.1,
        }
    }

    fn feature_rows(&self) -> Vec<[String; 3]> {
        let (l, r) = (self.left, self.right);
        vec![
            [
                "Population".into(),
                format::number_or_na(l.population),
                format::number_or_na(r.population),
            ],
            [
                "Area (sq km)".into(),
                format::number_or_na(l.area_km2),
                format::number_or_na(r.area_km2),
            ],
            ["Capital".into(), format::capital(l), format::capital(r)],
            [
                "Region".into(),
                format::text_or_na(l.region.as_deref()),
                format::text_or_na(r.region.as_deref()),
            ],
            ["Currency".into(), format::currencies(l), format::currencies(r)],
        ]
    }
}

impl Component for Comparison<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            "Feature".to_string(),
            self.left.common_name.clone(),
            self.right.common_name.clone(),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self.feature_rows().into_iter().map(Row::new).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Percentage(45),
                Constraint::Percentage(45),
            ],
        )
        .header(header)
        .block(
            Block::bordered()
                .title(" Country Comparison ")
                .border_style(Style::default().fg(Color::Green)),
        );

        frame.render_widget(table, area);
    }
}
