//! Feed body rendering: the Loading, Empty and Populated states.

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::{render_card, CardFlags, CARD_HEIGHT};
use super::helpers::{centered_rect, spinner};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_PENDING};
use crate::app::App;
use crate::state::FeedView;

/// Text of the empty-state call to action.
pub const EMPTY_CALL_TO_ACTION: &str = "Press f to find friends";

pub fn render_feed(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 || area.width == 0 {
        app.last_visible = None;
        return;
    }
    match app.feed.view() {
        FeedView::Loading => {
            app.last_visible = None;
            render_loading(frame, area, app.tick_count);
        }
        FeedView::Empty => {
            app.last_visible = None;
            render_empty(frame, area);
        }
        FeedView::Populated { trailing_loader } => {
            render_populated(frame, area, app, trailing_loader);
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let line = Line::from(vec![
        Span::styled(spinner(tick), Style::default().fg(COLOR_PENDING)),
        Span::raw(" Loading feed…"),
    ]);
    let rect = centered_rect(area.width, 1, area);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "No posts yet",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Workouts from people you follow show up here.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            EMPTY_CALL_TO_ACTION,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let rect = centered_rect(area.width, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

/// Cards from `scroll_offset`, keeping the selection in view. Records the
/// last card that fit so the app can treat it as having appeared.
fn render_populated(frame: &mut Frame, area: Rect, app: &mut App, trailing_loader: bool) {
    let len = app.feed.posts.len();
    let loader_rows = u16::from(trailing_loader);
    let per_page = (area.height.saturating_sub(loader_rows) / CARD_HEIGHT).max(1) as usize;

    app.selected = app.selected.min(len - 1);
    if app.selected < app.scroll_offset {
        app.scroll_offset = app.selected;
    } else if app.selected >= app.scroll_offset + per_page {
        app.scroll_offset = app.selected + 1 - per_page;
    }
    app.scroll_offset = app.scroll_offset.min(len - 1);

    let now = Utc::now();
    let mut y = area.y;
    let bottom = area.y + area.height;
    // Leave a row for the pagination spinner under the cards
    let card_bottom = bottom.saturating_sub(loader_rows).max(area.y + 1);
    let mut last = None;

    for (idx, post) in app.feed.posts.iter().enumerate().skip(app.scroll_offset) {
        if y >= card_bottom || (idx > app.scroll_offset && y + CARD_HEIGHT > card_bottom) {
            break;
        }
        let flags = CardFlags {
            selected: idx == app.selected,
            deletable: app.feed.can_delete(&post.id),
            pending: app.feed.is_mutation_pending(&post.id),
        };
        let height = CARD_HEIGHT.min(card_bottom - y);
        render_card(frame, Rect::new(area.x, y, area.width, height), post, flags, now);
        y += height;
        last = Some(idx);
    }
    app.last_visible = last;

    if trailing_loader && y < bottom {
        let line = Line::from(vec![
            Span::styled(spinner(app.tick_count), Style::default().fg(COLOR_PENDING)),
            Span::styled(" Loading more…", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}
