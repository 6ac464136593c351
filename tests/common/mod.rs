//! Common test utilities for integration tests.
//!
//! Fixtures for posts and authors, an `App` wired to the mock service, and
//! helpers for pumping service results and rendering into a `TestBackend`.
//!
//! # Example
//!
//! ```ignore
//! let service = MockFeedService::new();
//! service.push_page(page(posts_by(&friend(), 3), None));
//! let mut app = app_with(&service);
//! app.on_appear();
//! pump(&mut app, 2).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use ratatui::{backend::TestBackend, Terminal};
use stride::app::App;
use stride::models::{Author, FeedPage, PostId, PostWithAuthor};
use stride::ui;

/// How long a test waits for a single service result.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);

/// The signed-in user the mock reports by default.
pub fn me() -> Author {
    Author::new("u-me", "Me", "me")
}

pub fn friend() -> Author {
    Author::new("u-mara", "Mara Okafor", "mara")
}

/// A post with a distinct body so it can be found in a rendered buffer.
pub fn post(id: &str, author: &Author) -> PostWithAuthor {
    PostWithAuthor {
        id: PostId::new(id),
        author: author.clone(),
        body: format!("Body of {}", id),
        workout: None,
        created_at: Utc::now() - ChronoDuration::minutes(5),
        like_count: 0,
        comment_count: 0,
        liked_by_me: false,
    }
}

/// `count` posts by `author`, ids `p1..=pN`.
pub fn posts_by(author: &Author, count: usize) -> Vec<PostWithAuthor> {
    (1..=count).map(|i| post(&format!("p{}", i), author)).collect()
}

pub fn page(posts: Vec<PostWithAuthor>, cursor: Option<&str>) -> FeedPage {
    FeedPage::new(posts, cursor.map(str::to_string))
}

/// An app driven by `service`.
pub fn app_with(service: &MockFeedService) -> App {
    App::new(Arc::new(service.clone()))
}

/// Apply `count` service results, failing the test if one does not arrive.
pub async fn pump(app: &mut App, count: usize) {
    for i in 0..count {
        let received = tokio::time::timeout(MESSAGE_TIMEOUT, app.process_next_message())
            .await
            .unwrap_or_else(|_| panic!("timed out waiting for message {} of {}", i + 1, count));
        assert!(received, "message channel closed");
    }
}

/// Let spawned tasks run up to their next await point.
pub async fn let_tasks_run() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

/// Load the first page through the normal gesture path.
pub async fn loaded_app(service: &MockFeedService) -> App {
    let mut app = app_with(service);
    assert!(app.on_appear());
    // current user + first page
    pump(&mut app, 2).await;
    app
}

/// Render one frame and return the buffer as rows of text.
pub fn render_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

/// Row index of the first row containing `needle`.
pub fn row_of(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}
