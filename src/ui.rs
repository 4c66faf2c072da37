//! The UI renders the application state into something visible and scrollable.
//!
//! The screen is a header with navigation links and the theme toggle, the scroll container
//! with every section stacked in order, and a help bar. Sections are padded to at least one
//! viewport so each one fills the screen when scrolled to.

use crate::app_state::AppState;
use crate::content;
use crate::nav::{NavItem, NavigationSurface};
use crate::platform::Router;
use crate::registry::SectionRegistry;
use crate::section::{Section, SectionKey};
use crate::theme::ResolvedTheme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the header and the help bar together.
pub const CHROME_ROWS: u16 = 6;

#[derive(Clone, Copy, Debug)]
/// Colours for one resolved theme.
pub struct Palette {
    /// Body text.
    pub fg: Color,
    /// Background.
    pub bg: Color,
    /// Secondary text.
    pub muted: Color,
    /// Highlight for the active link and section headings.
    pub accent: Color,
}

impl Palette {
    #[must_use]
    /// Colours for `theme`.
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Rgb(52, 211, 153),
            },
            ResolvedTheme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Rgb(5, 150, 105),
            },
        }
    }
}

#[must_use]
/// Height of the scroll container for a terminal `total_rows` tall.
pub fn body_height(total_rows: u16) -> u16 {
    total_rows.saturating_sub(CHROME_ROWS)
}

fn pill(text: &str, palette: &Palette) -> Span<'static> {
    Span::styled(format!("( {text} )"), Style::default().fg(palette.muted))
}

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn pills(items: &[&str], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for item in items {
        spans.push(pill(item, palette));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[must_use]
/// Content lines of one section.
pub fn section_lines(section: &Section, copy_label: &str, palette: &Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::default()];

    match section.key {
        SectionKey::Top => {
            lines.push(Line::from(pill(content::HEADLINE, palette)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                SectionRegistry::owner().to_string(),
                bold.fg(palette.accent),
            )));
            lines.push(Line::default());
            lines.push(pills(content::STACK, palette));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "[2] Projects   [7] Contact",
                muted,
            )));
        }
        SectionKey::Projects => {
            lines.push(heading("Projects", palette));
            for project in content::PROJECTS {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(project.name.to_string(), bold)));
                lines.push(pills(project.tech, palette));
                lines.push(Line::from(Span::styled(format!("repo  {}", project.repo), muted)));
                lines.push(Line::from(Span::styled(format!("live  {}", project.live), muted)));
            }
        }
        SectionKey::Experience => {
            lines.push(heading("Experience", palette));
            for role in content::EXPERIENCE {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled(role.role.to_string(), bold),
                    Span::styled(format!("  {}", role.period), muted),
                ]));
                lines.push(Line::from(role.company.to_string()));
            }
        }
        SectionKey::Skills => {
            lines.push(heading("Skills", palette));
            lines.push(Line::default());
            lines.push(pills(content::SKILLS, palette));
        }
        SectionKey::Certificates => {
            lines.push(heading("Certificates", palette));
            for cert in content::CERTIFICATES {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(cert.title.to_string(), bold)));
                lines.push(Line::from(Span::styled(
                    format!("{} - {}  {}", cert.issuer, cert.year, cert.href),
                    muted,
                )));
            }
        }
        SectionKey::Education => {
            lines.push(heading("Education", palette));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(content::DEGREE, bold)));
            lines.push(Line::from(Span::styled(content::DEGREE_DETAIL, muted)));
        }
        SectionKey::Contact => {
            lines.push(heading("Contact", palette));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(content::EMAIL, bold),
                Span::raw("  "),
                Span::styled(
                    format!("[c] {copy_label}"),
                    Style::default().fg(palette.accent),
                ),
            ]));
        }
        SectionKey::Social => {
            lines.push(heading("Social", palette));
            for link in content::SOCIALS {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(link.label, bold)));
                lines.push(Line::from(Span::styled(link.href, muted)));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("(c) Arethusa", muted)));
        }
    }

    lines.push(Line::default());
    lines
}

#[must_use]
/// Content row count of every section, in registry order, for laying out the container.
pub fn section_rows(registry: &SectionRegistry) -> Vec<(&'static str, u16)> {
    let palette = Palette::for_theme(ResolvedTheme::Dark);
    registry
        .all()
        .iter()
        .map(|s| {
            let rows = section_lines(s, "Copy", &palette).len();
            (s.anchor_id, u16::try_from(rows).unwrap_or(u16::MAX))
        })
        .collect()
}

/// Renders the header, the scroll container and the help bar.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let palette = Palette::for_theme(app.theme.resolved());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Sections
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        f.area(),
    );

    draw_header(f, app, chunks[0], &palette);
    draw_sections(f, app, chunks[1], &palette);
    draw_help(f, app, chunks[2], &palette);
}

fn link_span(item: &NavItem, palette: &Palette) -> Span<'static> {
    let style = if item.active {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(palette.fg)
    };
    Span::styled(item.label.to_string(), style)
}

fn draw_header(f: &mut Frame, app: &mut AppState, area: Rect, palette: &Palette) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = NavigationSurface::brand();
    let items = app.nav.items(&app.registry, app.tracker.active_id());

    app.header_hits.clear();
    let mut spans = vec![Span::styled(
        format!("* {}", brand.label),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let mut x = inner.x;
    let brand_width = u16::try_from(brand.label.len() + 2).unwrap_or(u16::MAX);
    app.header_hits
        .push((Rect::new(x, inner.y, brand_width, 1), brand.path));
    x = x.saturating_add(brand_width);

    for item in &items {
        spans.push(Span::raw("   "));
        x = x.saturating_add(3);
        let width = u16::try_from(item.label.len()).unwrap_or(u16::MAX);
        app.header_hits.push((Rect::new(x, inner.y, width, 1), item.path));
        x = x.saturating_add(width);
        spans.push(link_span(item, palette));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    let mode = app.theme.mode();
    let toggle = format!("[t] {} ({mode})", app.theme.resolved().label());
    let toggle_width = u16::try_from(toggle.len()).unwrap_or(u16::MAX);
    if inner.width > toggle_width {
        let toggle_area = Rect::new(
            inner.x + inner.width - toggle_width,
            inner.y,
            toggle_width,
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(toggle, Style::default().fg(palette.muted))),
            toggle_area,
        );
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_sections(f: &mut Frame, app: &mut AppState, area: Rect, palette: &Palette) {
    if (app.container.viewport_height() - f64::from(area.height)).abs() >= 1.0 {
        app.resize(area.height);
    }

    let copy_label = app.copy.label();
    let bottom = f64::from(area.bottom());
    for (block, row) in app.container.visible_blocks() {
        let Some(section) = app.registry.by_anchor(block.anchor_id) else {
            continue;
        };
        let row = row.round();
        // Rows of the block already scrolled above the viewport
        let skip = (-row).max(0.0);
        let y = f64::from(area.y) + row.max(0.0);
        let height = (block.height - skip).min(bottom - y);
        if height < 1.0 {
            continue;
        }

        let rect = Rect::new(area.x, y as u16, area.width, height as u16);
        let lines = section_lines(section, copy_label, palette);
        f.render_widget(Paragraph::new(lines).scroll((skip as u16, 0)), rect);
    }
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let section = app.tracker.active_section();
    let help_text = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Scroll | Tab/S-Tab: Next/Prev | 1-8: Jump | ←/→: Back/Forward | t: Theme | c: Copy | q: Quit"
            .to_string()
    });

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(palette.muted))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", section.label, app.router.current_path())),
        );
    f.render_widget(help, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
