//! UI rendering for the Stride feed
//!
//! The screen is three rows of layout:
//! - Header with the brand and the refresh indicator
//! - Feed body in one of three states (Loading / Empty / Populated)
//! - Status line: the last error, or key hints
//!
//! Overlays (detail, compose, friends, delete prompt) draw on top.
//!
//! Rendering reads the view-model and only writes back viewport geometry
//! (`scroll_offset`, `last_visible`), which the app uses to notice the last
//! card coming into view.

mod card;
mod feed;
mod helpers;
mod overlays;
mod theme;

pub use card::{card_lines, CardFlags, CARD_HEIGHT};
pub use feed::EMPTY_CALL_TO_ACTION;
pub use helpers::{relative_time, spinner, truncate_to_width, SPINNER_FRAMES};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use feed::render_feed;
use overlays::render_overlay;
use theme::COLOR_PENDING;

/// Key hints shown when there is no error to report.
const FEED_HINTS: &str = "j/k move · l like · c comments · n post · f friends · r refresh · q quit";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the feed screen and any open overlay.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    render_feed(frame, body, app);
    render_status(frame, status, app);
    render_overlay(frame, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            " STRIDE",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · Feed", Style::default().fg(COLOR_HEADER)),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    if app.feed.is_refreshing {
        let indicator = Line::from(vec![
            Span::styled(spinner(app.tick_count), Style::default().fg(COLOR_PENDING)),
            Span::styled(" Refreshing ", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(indicator).alignment(Alignment::Right), area);
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.feed.last_error {
        Some(notice) => {
            let mut spans = vec![
                Span::styled(
                    format!(" ✗ {} failed: {}", notice.operation, notice.message),
                    Style::default().fg(COLOR_ERROR),
                ),
                Span::styled("  (x to dismiss)", Style::default().fg(COLOR_DIM)),
            ];
            // Clipped at the right edge on narrow terminals
            if let Some(hint) = notice.hint {
                spans.push(Span::styled(format!("  {}", hint), Style::default().fg(COLOR_DIM)));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            format!(" {}", truncate_to_width(FEED_HINTS, area.width.saturating_sub(1) as usize)),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
