use crate::core::cache::QueryKey;
use crate::core::list_view::page_count;
use crate::core::loader::ListLoad;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    COMPARISON_HEIGHT, Comparison, CountryTable, DetailView, SearchBox, TitleBar,
};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const RETRY_HINT: &str = "Press r to retry";

pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.route.to_string(),
        app.status_message.clone(),
        app.cache.read(QueryKey::Countries).map(|e| e.written_at),
    );
    title_bar.render(frame, title_area);

    match &app.route {
        Route::List => draw_list(frame, main_area, app, tui, spinner_frame),
        Route::Detail(_) => {
            let name = app.route.country_name().unwrap_or_default();
            let mut view = DetailView {
                detail: &app.detail,
                requested_name: &name,
                spinner: spinner_char(spinner_frame),
            };
            view.render(frame, main_area);
        }
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    match &app.list {
        ListLoad::Loading => {
            let text = format!("{} Loading countries...", spinner_char(spinner_frame));
            draw_centered(frame, area, vec![Line::from(text)], Color::Cyan);
            return;
        }
        ListLoad::Failed(message) => {
            let lines = vec![
                Line::from(format!("Error: {message}")),
                Line::default(),
                Line::from(RETRY_HINT),
            ];
            draw_centered(frame, area, lines, Color::Red);
            return;
        }
        ListLoad::Loaded(_) => {}
    }

    let comparison = app.selection.comparison();
    let comparison_height = if comparison.is_some() {
        COMPARISON_HEIGHT
    } else {
        0
    };
    let [search_area, table_area, comparison_area, help_area] = Layout::vertical([
        Length(3),
        Min(0),
        Length(comparison_height),
        Length(1),
    ])
    .areas(area);

    let mut search = SearchBox::new(
        app.view.query.clone(),
        tui.input_mode == InputMode::Search,
    );
    search.render(frame, search_area);

    let filtered = app.filtered();
    let rows = app.view.page_slice(&filtered);
    let cursor = (!rows.is_empty()).then(|| tui.cursor.min(rows.len() - 1));
    let mut table = CountryTable {
        rows,
        selection: &app.selection,
        cursor,
        filtered_len: filtered.len(),
        current_page: app.view.current_page,
        page_count: page_count(filtered.len()),
        has_previous: app.view.has_previous(),
        has_next: app.view.has_next(filtered.len()),
    };
    table.render(frame, table_area);

    if let Some(pair) = comparison {
        Comparison::new(pair).render(frame, comparison_area);
    }

    let help = match tui.input_mode {
        InputMode::Browse => {
            "/ search · ↑↓ move · ←→ page · space select · enter details · q quit"
        }
        InputMode::Search => "type to filter · enter/esc done",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_centered(frame: &mut Frame, area: Rect, lines: Vec<Line>, color: Color) {
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .centered()
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::core::action::{Action, update};
    use crate::test_support::{numbered_countries, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn loaded(n: usize) -> App {
        let mut app = test_app();
        update(&mut app, Action::LoadCountries);
        update(
            &mut app,
            Action::CountriesLoaded {
                seq: 1,
                result: Ok(numbered_countries(n)),
            },
        );
        app
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), spinner_char(SPINNER.len()));
    }

    #[test]
    fn test_loading_screen() {
        let mut app = test_app();
        update(&mut app, Action::LoadCountries);
        let text = render(&app, &TuiState::new());
        assert!(text.contains("Loading countries..."));
        assert!(text.contains("terra /countries"));
    }

    #[test]
    fn test_error_screen_has_retry_hint() {
        let mut app = test_app();
        update(&mut app, Action::LoadCountries);
        update(
            &mut app,
            Action::CountriesLoaded {
                seq: 1,
                result: Err(FetchError::Network("connection refused".into())),
            },
        );
        let text = render(&app, &TuiState::new());
        assert!(text.contains("Error: Failed to fetch data. Please try again later."));
        assert!(text.contains(RETRY_HINT));
    }

    #[test]
    fn test_list_screen_shows_first_page() {
        let app = loaded(15);
        let text = render(&app, &TuiState::new());
        assert!(text.contains("Country 0"));
        assert!(text.contains("Country 9"));
        assert!(!text.contains("Country 10"));
        assert!(text.contains("Page 1 of 2"));
        assert!(!text.contains("Country Comparison"));
    }

    #[test]
    fn test_comparison_shown_with_two_selected() {
        let mut app = loaded(3);
        update(&mut app, Action::ToggleSelection("C0".into()));
        update(&mut app, Action::ToggleSelection("C2".into()));
        let text = render(&app, &TuiState::new());
        assert!(text.contains("Country Comparison"));
        assert!(text.contains("[-]"));
    }

    #[test]
    fn test_detail_route_renders_detail_view() {
        let mut app = loaded(3);
        update(&mut app, Action::Navigate(Route::detail_for("Country 1")));
        let text = render(&app, &TuiState::new());
        assert!(text.contains("terra /country/Country%201"));
        assert!(text.contains("Loading..."));
    }
}
