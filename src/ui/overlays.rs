//! Surfaces rendered over the feed: post detail, compose sheet, friends
//! list and the delete prompt.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, inner_rect, relative_time, spinner, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_PENDING, COLOR_WORKOUT,
};
use crate::app::{App, Overlay};
use crate::models::PostWithAuthor;
use crate::state::{ComposeField, ComposeState, DetailState, FriendsState};
use crate::widgets::TextInput;

/// Render whichever overlay is open.
pub fn render_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match &app.overlay {
        Overlay::None => {}
        Overlay::Detail(detail) => {
            if let Some(post) = app.feed.get(&detail.post_id) {
                render_detail(frame, area, post, detail, app.tick_count);
            }
        }
        Overlay::Compose(compose) => render_compose(frame, area, compose, app.tick_count),
        Overlay::Friends(friends) => render_friends(frame, area, friends, app.tick_count),
        Overlay::ConfirmDelete(post_id) => {
            let preview = app
                .feed
                .get(post_id)
                .map(|p| p.body.lines().next().unwrap_or_default().to_string())
                .unwrap_or_default();
            render_confirm_delete(frame, area, &preview);
        }
    }
}

/// Clear `rect` and draw a titled dialog frame; returns the inner area.
fn dialog(frame: &mut Frame, rect: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(block, rect);
    inner_rect(rect, 1)
}

/// A one-line text input with a block cursor.
fn input_line(label: &str, input: &TextInput<'_>, focused: bool) -> Line<'static> {
    let text = input.text();
    let split = text
        .char_indices()
        .nth(input.cursor())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (before, after) = text.split_at(split);
    let mut spans = vec![
        Span::styled(format!("{} ", label), Style::default().fg(COLOR_DIM)),
        Span::raw(before.to_string()),
    ];
    if focused {
        let mut rest = after.chars();
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        spans.push(Span::styled(
            under,
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(rest.collect::<String>()));
    } else {
        spans.push(Span::raw(after.to_string()));
    }
    Line::from(spans)
}

fn error_line(error: &Option<String>) -> Line<'static> {
    match error {
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(COLOR_ERROR))),
        None => Line::from(""),
    }
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    post: &PostWithAuthor,
    detail: &DetailState,
    tick: u64,
) {
    let rect = centered_rect(area.width.saturating_sub(4).min(72), area.height.saturating_sub(2), area);
    let inner = dialog(frame, rect, "Post");
    let width = inner.width as usize;
    let now = Utc::now();

    let mut lines = vec![Line::from(vec![
        Span::styled(
            post.author.display_name.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" @{} · {}", post.author.handle, relative_time(post.created_at, now)),
            Style::default().fg(COLOR_DIM),
        ),
    ])];
    if let Some(workout) = &post.workout {
        lines.push(Line::from(Span::styled(
            workout.summary(),
            Style::default().fg(COLOR_WORKOUT),
        )));
    }
    lines.extend(post.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(Span::styled(
        format!("♥ {}   ✎ {}", post.like_count, post.comment_count),
        Style::default().fg(COLOR_DIM),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(COLOR_BORDER),
    )));

    if detail.loading {
        lines.push(Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(COLOR_PENDING)),
            Span::raw(" Loading comments…"),
        ]));
    } else if detail.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        for comment in detail.comments.iter().skip(detail.scroll) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", comment.author.display_name),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::raw(truncate_to_width(
                    &comment.body,
                    width.saturating_sub(comment.author.display_name.len() + 2),
                )),
            ]));
        }
    }

    // Draft and hints pinned to the bottom of the dialog
    let footer_height = 3u16.min(inner.height);
    let body_area = Rect {
        height: inner.height.saturating_sub(footer_height),
        ..inner
    };
    let footer_area = Rect {
        y: inner.y + body_area.height,
        height: footer_height,
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

    let status = if detail.submitting {
        Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(COLOR_PENDING)),
            Span::raw(" Posting…"),
        ])
    } else {
        error_line(&detail.error)
    };
    let footer = vec![
        input_line("Comment:", &detail.draft, !detail.submitting),
        status,
        Line::from(Span::styled(
            "Enter send · ↑/↓ scroll · Esc close",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn render_compose(frame: &mut Frame, area: Rect, compose: &ComposeState, tick: u64) {
    let rect = centered_rect(60, 10, area);
    let inner = dialog(frame, rect, "New post");

    let counter = match compose.body.max_chars() {
        Some(max) => format!("{}/{}", compose.body.char_count(), max),
        None => compose.body.char_count().to_string(),
    };
    let status = if compose.submitting {
        Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(COLOR_PENDING)),
            Span::raw(" Publishing…"),
        ])
    } else {
        error_line(&compose.error)
    };

    let editable = !compose.submitting;
    let lines = vec![
        input_line("Post:", &compose.body, editable && compose.focus == ComposeField::Body),
        Line::from(Span::styled(counter, Style::default().fg(COLOR_DIM))),
        Line::from(""),
        input_line(
            "Workout:",
            &compose.workout,
            editable && compose.focus == ComposeField::Workout,
        ),
        Line::from(Span::styled(
            "e.g. run 30m 5.2km · ride 1h30m · yoga 45m",
            Style::default().fg(COLOR_DIM),
        )),
        status,
        Line::from(Span::styled(
            "Enter publish · Tab switch field · Esc cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_friends(frame: &mut Frame, area: Rect, friends: &FriendsState, tick: u64) {
    let height = (friends.friends.len() as u16 + 4).clamp(6, area.height.saturating_sub(2).max(6));
    let rect = centered_rect(50, height, area);
    let inner = dialog(frame, rect, "Friends");

    let mut lines = Vec::new();
    if friends.loading {
        lines.push(Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(COLOR_PENDING)),
            Span::raw(" Loading friends…"),
        ]));
    } else if let Some(err) = &friends.error {
        lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(COLOR_ERROR))));
    } else if friends.friends.is_empty() {
        lines.push(Line::from(Span::styled(
            "No friends yet",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        for (idx, friend) in friends.friends.iter().enumerate() {
            let marker = if idx == friends.selected { "› " } else { "  " };
            let name_style = if idx == friends.selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(friend.display_name.clone(), name_style),
                Span::styled(format!(" @{}", friend.handle), Style::default().fg(COLOR_DIM)),
                Span::styled(
                    format!("  {} mutual", friend.mutual_friends),
                    Style::default().fg(COLOR_DIM),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "j/k move · Esc close",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm_delete(frame: &mut Frame, area: Rect, preview: &str) {
    let rect = centered_rect(50, 6, area);
    let inner = dialog(frame, rect, "Delete post?");
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(preview, inner.width as usize),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
            Span::raw(" delete   "),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" keep"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
