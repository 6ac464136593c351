//! Rendering of the feed screen's three states and per-card affordances.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stride::app::Overlay;
use stride::input::CommandRegistry;
use stride::models::PostId;
use stride::state::FeedView;
use stride::ui::EMPTY_CALL_TO_ACTION;

#[tokio::test]
async fn test_initial_load_with_no_posts_shows_loading() {
    let service = MockFeedService::new();
    service.hold(MockOp::FetchFeed);
    let mut app = app_with(&service);

    assert!(app.on_appear());
    let_tasks_run().await;

    assert_eq!(app.feed.view(), FeedView::Loading);
    let rows = render_rows(&mut app, 80, 24);
    assert!(row_of(&rows, "Loading feed").is_some());
    assert!(row_of(&rows, "No posts yet").is_none());

    service.release(MockOp::FetchFeed);
}

#[tokio::test]
async fn test_loaded_empty_feed_shows_call_to_action() {
    let service = MockFeedService::new();
    let mut app = loaded_app(&service).await;

    assert_eq!(app.feed.view(), FeedView::Empty);
    let rows = render_rows(&mut app, 80, 24);
    assert!(row_of(&rows, "No posts yet").is_some());
    assert!(row_of(&rows, EMPTY_CALL_TO_ACTION).is_some());
    assert!(row_of(&rows, "Loading feed").is_none());
}

#[tokio::test]
async fn test_call_to_action_key_opens_friends_list() {
    let service = MockFeedService::new();
    service.set_friends(vec![stride::models::Friend {
        id: "u-mara".into(),
        display_name: "Mara Okafor".to_string(),
        handle: "mara".to_string(),
        mutual_friends: 2,
    }]);
    let mut app = loaded_app(&service).await;

    let registry = CommandRegistry::new();
    let key = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
    let cmd = registry
        .dispatch(key, &app.build_input_context())
        .expect("f is bound on the feed");
    assert!(app.execute_command(cmd));
    assert!(matches!(app.overlay, Overlay::Friends(_)));

    pump(&mut app, 1).await;
    assert_eq!(service.count(MockOp::FetchFriends), 1);
    let rows = render_rows(&mut app, 80, 24);
    assert!(row_of(&rows, "Mara Okafor").is_some());
}

#[tokio::test]
async fn test_populated_feed_renders_one_card_per_post_in_order() {
    let service = service_with_page(posts_by(&friend(), 3), None);
    let mut app = loaded_app(&service).await;

    assert_eq!(
        app.feed.view(),
        FeedView::Populated {
            trailing_loader: false
        }
    );
    let rows = render_rows(&mut app, 80, 30);
    let positions: Vec<usize> = ["Body of p1", "Body of p2", "Body of p3"]
        .iter()
        .map(|body| row_of(&rows, body).expect("card rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        rows.iter().filter(|row| row.contains("Mara Okafor")).count(),
        3
    );
    assert!(row_of(&rows, "Loading more").is_none());
    assert_eq!(app.last_visible, Some(2));
}

#[tokio::test]
async fn test_pagination_shows_trailing_loader_after_last_card() {
    let service = service_with_page(posts_by(&friend(), 3), Some("c1"));
    let mut app = loaded_app(&service).await;

    service.hold(MockOp::FetchFeed);
    assert!(app.load_more());
    assert_eq!(
        app.feed.view(),
        FeedView::Populated {
            trailing_loader: true
        }
    );

    let rows = render_rows(&mut app, 80, 30);
    let last_card = row_of(&rows, "Body of p3").expect("last card rendered");
    let loader = row_of(&rows, "Loading more").expect("trailing loader rendered");
    assert!(loader > last_card);

    service.release(MockOp::FetchFeed);
}

#[tokio::test]
async fn test_delete_affordance_only_on_own_posts() {
    let service = service_with_page(vec![post("mine", &me()), post("theirs", &friend())], None);
    let mut app = loaded_app(&service).await;

    let rows = render_rows(&mut app, 80, 30);
    let mine = row_of(&rows, "Body of mine").unwrap();
    let theirs = row_of(&rows, "Body of theirs").unwrap();
    // The footer row sits directly under the body row
    assert!(rows[mine + 1].contains("d delete"));
    assert!(!rows[theirs + 1].contains("d delete"));
}

#[tokio::test]
async fn test_delete_affordance_hidden_while_delete_pending() {
    let service = service_with_page(vec![post("mine", &me())], None);
    let mut app = loaded_app(&service).await;

    service.hold(MockOp::Delete);
    assert!(app.request_delete(&PostId::new("mine")));
    let_tasks_run().await;

    let rows = render_rows(&mut app, 80, 30);
    let mine = row_of(&rows, "Body of mine").expect("post stays until confirmed");
    assert!(!rows[mine + 1].contains("d delete"));

    service.release(MockOp::Delete);
}

#[tokio::test]
async fn test_refresh_indicator_shown_while_refreshing() {
    let service = service_with_page(posts_by(&friend(), 2), None);
    let mut app = loaded_app(&service).await;

    service.hold(MockOp::FetchFeed);
    assert!(app.refresh());
    let rows = render_rows(&mut app, 80, 24);
    assert!(rows[0].contains("Refreshing"));
    // Existing cards stay on screen during a refresh
    assert!(row_of(&rows, "Body of p1").is_some());

    service.release(MockOp::FetchFeed);
}
