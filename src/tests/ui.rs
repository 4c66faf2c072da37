use super::{body_height, draw};
use crate::app_state::AppState;
use crate::config::Config;
use crate::content::DEGREE;
use crate::platform::TitleSink;
use crate::registry::SectionRegistry;
use crate::theme::{ResolvedTheme, ThemeService};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Instant;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

struct NoTitle;

impl TitleSink for NoTitle {
    fn set_title(&mut self, _title: &str) {}
}

fn synced_app(path: &str) -> AppState {
    let mut config = Config::defaults();
    config.reduced_motion = true;
    let theme = ThemeService::load(None, ResolvedTheme::Dark);
    let mut app = AppState::new(
        &config,
        SectionRegistry::portfolio(),
        path,
        theme,
        body_height(HEIGHT),
    );
    app.sync_route(Instant::now(), &mut NoTitle);
    app
}

fn render(app: &mut AppState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..HEIGHT).map(|y| row_text(buffer, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_only_the_routed_section_is_on_screen() {
    let mut home = synced_app("/");
    let mut education = synced_app("/education");

    assert!(!screen_text(&render(&mut home)).contains(DEGREE));
    assert!(screen_text(&render(&mut education)).contains(DEGREE));
}

#[test]
fn test_help_bar_names_active_section_and_route() {
    let mut app = synced_app("/education");

    let screen = screen_text(&render(&mut app));

    assert!(screen.contains("Education (/education)"), "{screen}");
}

#[test]
fn test_partially_scrolled_sections_share_the_screen() {
    let mut app = synced_app("/");
    app.container.scroll_by(12.0);

    let buffer = render(&mut app);

    // Header takes three rows, so the projects block starts at row 3 + 24 - 12
    let projects_top = 3 + body_height(HEIGHT) - 12;
    assert!(row_text(&buffer, projects_top + 1).contains("Projects"));
    assert!(row_text(&buffer, projects_top - 1).trim().is_empty());
}

#[test]
fn test_header_links_are_clickable() {
    let mut app = synced_app("/");

    render(&mut app);

    let paths: Vec<&str> = app.header_hits.iter().map(|&(_, path)| path).collect();
    assert_eq!(
        paths,
        vec!["/", "/projects", "/experience", "/skills", "/certificates"]
    );
}
