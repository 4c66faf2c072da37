use super::{AppState, Flow, IDLE_POLL};
use crate::clipboard::{Clipboard, CopyState};
use crate::config::Config;
use crate::content::EMAIL;
use crate::error::Result;
use crate::platform::{Router, TitleSink, Viewport};
use crate::registry::SectionRegistry;
use crate::theme::{ResolvedTheme, ThemeMode, ThemeService};
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

const VIEWPORT_ROWS: u16 = 20;

#[derive(Default)]
struct Titles(Vec<String>);

impl TitleSink for Titles {
    fn set_title(&mut self, title: &str) {
        self.0.push(title.to_string());
    }
}

#[derive(Default)]
struct FakeClipboard(Option<String>);

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0 = Some(text.to_string());
        Ok(())
    }
}

fn app_with(config: &Config, path: &str) -> AppState {
    let theme = ThemeService::load(None, ResolvedTheme::Dark);
    AppState::new(
        config,
        SectionRegistry::portfolio(),
        path,
        theme,
        VIEWPORT_ROWS,
    )
}

fn jumping_app(path: &str) -> AppState {
    let mut config = Config::defaults();
    config.reduced_motion = true;
    app_with(&config, path)
}

fn press(app: &mut AppState, code: KeyCode, now: Instant) -> Flow {
    app.handle_key(
        KeyEvent::new(code, KeyModifiers::NONE),
        now,
        &mut FakeClipboard::default(),
    )
}

fn block_top(app: &AppState, anchor_id: &str) -> f64 {
    let index = app.container.anchor(anchor_id).unwrap();
    app.container.blocks()[index].top
}

#[test]
fn test_initial_route_selects_section() {
    let mut app = jumping_app("/experience");
    let mut titles = Titles::default();

    app.sync_route(Instant::now(), &mut titles);

    assert_eq!(app.tracker.active_id(), "experience");
    assert_eq!(titles.0, vec!["Experience | Arethusa Aryandhana"]);
    assert_eq!(app.container.scroll_top(), block_top(&app, "experience"));
}

#[test]
fn test_unknown_route_shows_home() {
    let mut app = jumping_app("/nope");
    let mut titles = Titles::default();

    app.sync_route(Instant::now(), &mut titles);

    assert_eq!(app.tracker.active_id(), "top");
    assert_eq!(app.router.current_path(), "/nope");
    assert_eq!(titles.0, vec!["Arethusa Aryandhana | Full-Stack Developer"]);
}

#[test]
fn test_number_key_navigates() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);

    assert_eq!(press(&mut app, KeyCode::Char('4'), t0), Flow::Continue);
    app.sync_route(t0, &mut titles);

    assert_eq!(app.router.current_path(), "/skills");
    assert_eq!(app.tracker.active_id(), "skills");
    assert_eq!(titles.0.last().map(String::as_str), Some("Skills | Arethusa Aryandhana"));
    assert_eq!(app.container.scroll_top(), block_top(&app, "skills"));
}

#[test]
fn test_sync_only_fires_on_router_change() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();

    app.sync_route(t0, &mut titles);
    app.sync_route(t0, &mut titles);
    assert_eq!(titles.0.len(), 1);

    // Same route again does not touch the history
    app.navigate("/");
    app.sync_route(t0, &mut titles);
    assert_eq!(titles.0.len(), 1);
}

#[test]
fn test_tab_and_history_keys() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);

    press(&mut app, KeyCode::Tab, t0);
    app.sync_route(t0, &mut titles);
    assert_eq!(app.tracker.active_id(), "projects");

    press(&mut app, KeyCode::Tab, t0);
    app.sync_route(t0, &mut titles);
    assert_eq!(app.tracker.active_id(), "experience");

    press(&mut app, KeyCode::Left, t0);
    app.sync_route(t0, &mut titles);
    assert_eq!(app.router.current_path(), "/projects");
    assert_eq!(app.tracker.active_id(), "projects");

    press(&mut app, KeyCode::Char(']'), t0);
    app.sync_route(t0, &mut titles);
    assert_eq!(app.tracker.active_id(), "experience");

    press(&mut app, KeyCode::BackTab, t0);
    app.sync_route(t0, &mut titles);
    assert_eq!(app.router.current_path(), "/projects");
}

#[test]
fn test_manual_scroll_updates_active_section_after_settle() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);
    app.frame(t0);

    let t1 = t0 + Duration::from_millis(1100);
    press(&mut app, KeyCode::End, t1);
    app.frame(t1);
    assert!(app.tracker.has_pending_frame());

    app.frame(t1 + Duration::from_millis(16));

    assert_eq!(app.tracker.active_id(), "social");
    // Scrolling never touches the route or the title
    assert_eq!(app.router.current_path(), "/");
    assert_eq!(titles.0.len(), 1);
}

#[test]
fn test_manual_scroll_during_settle_is_ignored() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);
    press(&mut app, KeyCode::Char('4'), t0);
    app.sync_route(t0, &mut titles);

    let t1 = t0 + Duration::from_millis(50);
    press(&mut app, KeyCode::End, t1);
    app.frame(t1);
    app.frame(t1 + Duration::from_millis(16));

    assert!(!app.tracker.has_pending_frame());
    assert_eq!(app.tracker.active_id(), "skills");
}

#[test]
fn test_animated_route_scroll_reaches_anchor() {
    let mut app = app_with(&Config::defaults(), "/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);

    app.navigate("/education");
    app.sync_route(t0, &mut titles);
    assert!(app.container.is_animating());
    assert_eq!(app.poll_timeout(t0), Config::defaults().frame_interval());

    let mut now = t0;
    while app.container.is_animating() {
        app.frame(now);
        now += Duration::from_millis(16);
    }

    assert_eq!(app.container.scroll_top(), block_top(&app, "education"));
    assert_eq!(app.tracker.active_id(), "education");
}

#[test]
fn test_theme_key_cycles_and_reports() {
    let mut app = jumping_app("/");

    press(&mut app, KeyCode::Char('t'), Instant::now());

    assert_eq!(app.theme.mode(), ThemeMode::Light);
    assert_eq!(
        app.message.as_deref(),
        Some("Theme: light (resolved: light)")
    );

    // Any other key clears the status message
    press(&mut app, KeyCode::Char('j'), Instant::now());
    assert_eq!(app.message, None);
}

#[test]
fn test_copy_key_copies_email() {
    let mut app = jumping_app("/contact-person");
    let mut clipboard = FakeClipboard::default();
    let now = Instant::now();

    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
        now,
        &mut clipboard,
    );

    assert_eq!(clipboard.0.as_deref(), Some(EMAIL));
    assert_eq!(app.copy.state(), CopyState::Copied);
    app.frame(now + Duration::from_millis(1200));
    assert_eq!(app.copy.state(), CopyState::Idle);
}

#[test]
fn test_poll_timeout_follows_deadlines() {
    let mut config = Config::defaults();
    config.reduced_motion = true;
    config.copy_feedback_ms = 500;
    let mut app = app_with(&config, "/");
    let now = Instant::now();

    assert_eq!(app.poll_timeout(now), IDLE_POLL);

    press(&mut app, KeyCode::Char('c'), now);
    assert_eq!(app.poll_timeout(now), Duration::from_millis(500));
    assert_eq!(
        app.poll_timeout(now + Duration::from_millis(200)),
        Duration::from_millis(300)
    );
}

#[test]
fn test_quit_keys() {
    let mut app = jumping_app("/");
    let now = Instant::now();

    assert_eq!(press(&mut app, KeyCode::Char('q'), now), Flow::Quit);
    assert_eq!(press(&mut app, KeyCode::Esc, now), Flow::Quit);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(
        app.handle_key(ctrl_c, now, &mut FakeClipboard::default()),
        Flow::Quit
    );
}

#[test]
fn test_header_click_requests_route() {
    let mut app = jumping_app("/");
    app.header_hits = vec![
        (Rect::new(20, 1, 8, 1), "/projects"),
        (Rect::new(30, 1, 6, 1), "/skills"),
    ];

    let click = |column| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };

    app.handle_mouse(click(5));
    assert_eq!(app.router.current_path(), "/");

    app.handle_mouse(click(32));
    assert_eq!(app.router.current_path(), "/skills");
}

#[test]
fn test_paging_back_to_current_route_scrolls_again() {
    let mut app = jumping_app("/projects");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);
    app.frame(t0);

    let t1 = t0 + Duration::from_millis(1100);
    press(&mut app, KeyCode::Home, t1);
    app.frame(t1);
    app.frame(t1 + Duration::from_millis(16));
    assert_eq!(app.tracker.active_id(), "top");

    let t2 = t1 + Duration::from_millis(500);
    press(&mut app, KeyCode::Tab, t2);
    app.sync_route(t2, &mut titles);

    assert_eq!(app.router.current_path(), "/projects");
    assert_eq!(app.router.history_len(), 1);
    assert_eq!(app.tracker.active_id(), "projects");
    assert_eq!(app.container.scroll_top(), block_top(&app, "projects"));
}

#[test]
fn test_digit_for_current_route_scrolls_again() {
    let mut app = jumping_app("/skills");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);
    app.frame(t0);

    let t1 = t0 + Duration::from_millis(1100);
    press(&mut app, KeyCode::End, t1);
    app.frame(t1);
    app.frame(t1 + Duration::from_millis(16));
    assert_eq!(app.tracker.active_id(), "social");

    press(&mut app, KeyCode::Char('4'), t1 + Duration::from_millis(200));
    app.sync_route(t1 + Duration::from_millis(200), &mut titles);

    assert_eq!(app.tracker.active_id(), "skills");
    assert_eq!(app.container.scroll_top(), block_top(&app, "skills"));
}

#[test]
fn test_throttled_movement_is_measured_later() {
    let mut app = jumping_app("/");
    let mut titles = Titles::default();
    let t0 = Instant::now();
    app.sync_route(t0, &mut titles);

    let t1 = t0 + Duration::from_millis(1100);
    press(&mut app, KeyCode::End, t1);
    app.frame(t1);
    app.frame(t1 + Duration::from_millis(16));
    assert_eq!(app.tracker.active_id(), "social");

    // Back to the top inside the throttle window
    let t2 = t1 + Duration::from_millis(50);
    press(&mut app, KeyCode::Home, t2);
    app.frame(t2);
    assert!(!app.tracker.has_pending_frame());
    assert_eq!(app.poll_timeout(t2), Config::defaults().frame_interval());

    let t3 = t1 + Duration::from_millis(120);
    app.frame(t3);
    app.frame(t3 + Duration::from_millis(16));

    assert_eq!(app.tracker.active_id(), "top");
    assert_eq!(app.poll_timeout(t3 + Duration::from_millis(16)), IDLE_POLL);
}
