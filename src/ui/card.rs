//! Post card rendering
//!
//! A card is a bordered block of fixed height:
//!
//! ```text
//! ╭────────────────────────────────────────╮
//! │ Mara Okafor @mara · 3h                 │
//! │ Run · 30 min · 5.2 km                  │
//! │ Easy recovery run along the river      │
//! │ ♥ 4   ✎ 1                    d delete  │
//! ╰────────────────────────────────────────╯
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{relative_time, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LIKED, COLOR_PENDING, COLOR_SELECTED,
    COLOR_WORKOUT,
};
use crate::models::PostWithAuthor;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Per-card display flags computed by the feed renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardFlags {
    pub selected: bool,
    /// Offer the delete control (own post)
    pub deletable: bool,
    /// A like or delete is waiting on the service
    pub pending: bool,
}

/// Content lines of a card, without the border.
pub fn card_lines(
    post: &PostWithAuthor,
    flags: CardFlags,
    width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let header = Line::from(vec![
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
    ]);

    let workout = match &post.workout {
        Some(w) => Line::from(Span::styled(w.summary(), Style::default().fg(COLOR_WORKOUT))),
        None => Line::from(""),
    };

    let first_line = post.body.lines().next().unwrap_or_default();
    let body = Line::from(truncate_to_width(first_line, width));

    let heart = if post.liked_by_me { "♥" } else { "♡" };
    let heart_style = if post.liked_by_me {
        Style::default().fg(COLOR_LIKED)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let mut footer = vec![
        Span::styled(format!("{} {}", heart, post.like_count), heart_style),
        Span::styled(
            format!("   ✎ {}", post.comment_count),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if flags.pending {
        footer.push(Span::styled("   …", Style::default().fg(COLOR_PENDING)));
    }
    if flags.deletable {
        footer.push(Span::styled("   d delete", Style::default().fg(COLOR_DIM)));
    }

    vec![header, workout, body, Line::from(footer)]
}

/// Render one card into `area`.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    post: &PostWithAuthor,
    flags: CardFlags,
    now: DateTime<Utc>,
) {
    let border_style = if flags.selected {
        Style::default().fg(COLOR_SELECTED)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(4) as usize;
    let lines = card_lines(post, flags, inner_width, now);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(
        paragraph,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(CARD_HEIGHT),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, Author, PostId, Workout};

    fn post(liked: bool) -> PostWithAuthor {
        PostWithAuthor {
            id: PostId::new("p1"),
            author: Author::new("u1", "Mara", "mara"),
            body: "Hill repeats\nsecond line".to_string(),
            workout: Some(Workout {
                activity: ActivityKind::Run,
                duration_secs: 1800,
                distance_m: Some(5200),
            }),
            created_at: Utc::now(),
            like_count: 4,
            comment_count: 1,
            liked_by_me: liked,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_lines_content() {
        let lines = card_lines(&post(true), CardFlags::default(), 40, Utc::now());
        assert_eq!(lines.len(), 4);
        assert!(text(&lines[0]).starts_with("Mara @mara"));
        assert_eq!(text(&lines[1]), "Run · 30 min · 5.2 km");
        assert_eq!(text(&lines[2]), "Hill repeats");
        assert!(text(&lines[3]).starts_with("♥ 4"));
    }

    #[test]
    fn test_delete_hint_only_when_deletable() {
        let plain = card_lines(&post(false), CardFlags::default(), 40, Utc::now());
        assert!(!text(&plain[3]).contains("delete"));

        let own = CardFlags {
            deletable: true,
            ..CardFlags::default()
        };
        let lines = card_lines(&post(false), own, 40, Utc::now());
        assert!(text(&lines[3]).contains("d delete"));
    }
}
