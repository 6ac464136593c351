//! Gesture-to-service behavior of the feed view-model against the mock.

mod common;

use common::*;
use std::time::Duration;
use stride::app::Overlay;
use stride::error::FeedError;
use stride::input::Command;
use stride::models::PostId;

#[tokio::test]
async fn test_delete_own_post_issues_exactly_one_request() {
    let service = service_with_page(vec![post("mine", &me()), post("theirs", &friend())], None);
    let mut app = loaded_app(&service).await;
    let mine = PostId::new("mine");

    assert!(app.request_delete(&mine));
    // A second gesture while the first is in flight is ignored
    assert!(!app.request_delete(&mine));
    pump(&mut app, 1).await;

    let deletes: Vec<_> = service
        .calls()
        .into_iter()
        .filter(|c| c.op() == MockOp::Delete)
        .collect();
    assert_eq!(deletes, vec![RecordedCall::Delete(mine.clone())]);
    assert!(app.feed.get(&mine).is_none());
    assert_eq!(app.feed.posts.len(), 1);
}

#[tokio::test]
async fn test_delete_on_others_post_issues_no_request() {
    let service = service_with_page(vec![post("theirs", &friend())], None);
    let mut app = loaded_app(&service).await;

    assert!(!app.request_delete(&PostId::new("theirs")));
    // The keyboard path does not even open the prompt
    assert!(!app.execute_command(Command::PromptDelete));
    let_tasks_run().await;

    assert_eq!(service.count(MockOp::Delete), 0);
    assert!(!app.overlay.is_open());
}

#[tokio::test]
async fn test_delete_prompt_then_confirm() {
    let service = service_with_page(vec![post("mine", &me())], None);
    let mut app = loaded_app(&service).await;

    assert!(app.execute_command(Command::PromptDelete));
    assert!(matches!(app.overlay, Overlay::ConfirmDelete(_)));
    assert_eq!(service.count(MockOp::Delete), 0);

    assert!(app.execute_command(Command::ConfirmDelete));
    assert!(!app.overlay.is_open());
    pump(&mut app, 1).await;

    assert_eq!(service.count(MockOp::Delete), 1);
    assert!(app.feed.posts.is_empty());
}

#[tokio::test]
async fn test_refresh_issues_one_request_and_indicator_lasts_until_success() {
    let service = service_with_page(posts_by(&friend(), 2), None);
    let mut app = loaded_app(&service).await;
    service.push_page(page(posts_by(&friend(), 4), None));
    service.clear_calls();

    service.hold(MockOp::FetchFeed);
    assert!(app.refresh());
    assert!(!app.refresh());
    let_tasks_run().await;

    assert_eq!(service.count(MockOp::FetchFeed), 1);
    assert!(app.feed.is_refreshing);

    service.release(MockOp::FetchFeed);
    // refresh re-checks the current user only when unknown
    pump(&mut app, 1).await;

    assert!(!app.feed.is_refreshing);
    assert_eq!(app.feed.posts.len(), 4);
}

#[tokio::test]
async fn test_refresh_indicator_clears_on_failure_and_keeps_posts() {
    let service = service_with_page(posts_by(&friend(), 2), None);
    let mut app = loaded_app(&service).await;
    service.push_page_error(server_error());

    assert!(app.refresh());
    assert!(app.feed.is_refreshing);
    pump(&mut app, 1).await;

    assert!(!app.feed.is_refreshing);
    assert_eq!(app.feed.posts.len(), 2);
    let notice = app.feed.last_error.as_ref().expect("error recorded");
    assert_eq!(notice.operation, "refresh");

    assert!(app.execute_command(Command::DismissError));
    assert!(app.feed.last_error.is_none());
}

#[tokio::test]
async fn test_failed_initial_load_shows_empty_with_error() {
    let service = MockFeedService::new();
    service.push_page_error(server_error());
    let mut app = loaded_app(&service).await;

    assert_eq!(app.feed.view(), stride::state::FeedView::Empty);
    assert_eq!(
        app.feed.last_error.as_ref().map(|n| n.operation),
        Some("load feed")
    );

    // Refresh is the retry
    service.push_page(page(posts_by(&friend(), 1), None));
    assert!(app.refresh());
    pump(&mut app, 1).await;
    assert_eq!(app.feed.posts.len(), 1);
}

#[tokio::test]
async fn test_repeated_last_item_appearance_issues_one_fetch() {
    let service = service_with_page(posts_by(&friend(), 3), Some("c1"));
    let mut app = loaded_app(&service).await;
    service.push_page(page(vec![post("p4", &friend())], None));
    service.clear_calls();

    service.hold(MockOp::FetchFeed);
    let last = PostId::new("p3");
    assert!(app.on_item_appear(&last));
    for _ in 0..5 {
        assert!(!app.on_item_appear(&last));
    }
    // Cards other than the last never paginate
    assert!(!app.on_item_appear(&PostId::new("p1")));
    let_tasks_run().await;

    assert_eq!(
        service.calls(),
        vec![RecordedCall::FetchFeed {
            cursor: Some("c1".to_string()),
            limit: app.page_size,
        }]
    );

    service.release(MockOp::FetchFeed);
    pump(&mut app, 1).await;
    assert_eq!(app.feed.posts.len(), 4);
    assert!(!app.feed.is_loading_more);

    // Last page reached: the new last card does not fetch again
    assert!(!app.on_item_appear(&PostId::new("p4")));
}

#[tokio::test]
async fn test_viewport_reaching_last_card_loads_next_page() {
    let service = service_with_page(posts_by(&friend(), 2), Some("c1"));
    let mut app = loaded_app(&service).await;

    // Both cards fit, so the last one has appeared
    render_rows(&mut app, 80, 30);
    assert_eq!(app.last_visible, Some(1));
    assert!(app.notify_viewport());
    assert!(app.feed.is_loading_more);
    pump(&mut app, 1).await;
    assert_eq!(service.count(MockOp::FetchFeed), 2);
}

#[tokio::test]
async fn test_failed_like_rolls_back() {
    let service = service_with_page(posts_by(&friend(), 1), None);
    let mut app = loaded_app(&service).await;
    service.fail(MockOp::Like, server_error());
    let id = PostId::new("p1");

    assert!(app.toggle_like(&id));
    {
        let post = app.feed.get(&id).unwrap();
        assert!(post.liked_by_me);
        assert_eq!(post.like_count, 1);
    }
    assert!(app.feed.is_mutation_pending(&id));
    assert!(!app.toggle_like(&id));

    pump(&mut app, 1).await;
    let post = app.feed.get(&id).unwrap();
    assert!(!post.liked_by_me);
    assert_eq!(post.like_count, 0);
    assert!(!app.feed.is_mutation_pending(&id));
    assert_eq!(app.feed.last_error.as_ref().map(|n| n.operation), Some("like"));
}

#[tokio::test]
async fn test_like_then_unlike_round_trip() {
    let service = service_with_page(posts_by(&friend(), 1), None);
    let mut app = loaded_app(&service).await;
    let id = PostId::new("p1");

    assert!(app.execute_command(Command::ToggleLike));
    pump(&mut app, 1).await;
    assert!(app.feed.get(&id).unwrap().liked_by_me);

    assert!(app.execute_command(Command::ToggleLike));
    pump(&mut app, 1).await;
    assert!(!app.feed.get(&id).unwrap().liked_by_me);

    assert_eq!(service.count(MockOp::Like), 1);
    assert_eq!(service.count(MockOp::Unlike), 1);
}

#[tokio::test]
async fn test_failed_delete_leaves_post() {
    let service = service_with_page(vec![post("mine", &me())], None);
    let mut app = loaded_app(&service).await;
    service.fail(
        MockOp::Delete,
        FeedError::NotAuthor {
            post_id: PostId::new("mine"),
        },
    );

    assert!(app.request_delete(&PostId::new("mine")));
    pump(&mut app, 1).await;

    assert_eq!(app.feed.posts.len(), 1);
    assert!(!app.feed.is_mutation_pending(&PostId::new("mine")));
    assert_eq!(app.feed.last_error.as_ref().map(|n| n.operation), Some("delete"));
}

#[tokio::test]
async fn test_shutdown_aborts_reads_but_mutations_complete() {
    let service = service_with_page(posts_by(&friend(), 2), Some("c1"));
    let mut app = loaded_app(&service).await;
    let completed_before = service.completed();

    service.hold(MockOp::FetchFeed);
    service.hold(MockOp::Like);
    assert!(app.load_more());
    assert!(app.toggle_like(&PostId::new("p1")));
    let_tasks_run().await;
    assert_eq!(app.reads_in_flight(), 1);
    assert_eq!(app.mutations_in_flight(), 1);

    app.shutdown();
    assert!(app.should_quit);
    service.release(MockOp::FetchFeed);
    service.release(MockOp::Like);

    assert!(app.settle_mutations(Duration::from_secs(2)).await);
    let_tasks_run().await;

    assert_eq!(service.count(MockOp::Like), 1);
    // Only the like returned; the page fetch was cancelled while held
    assert_eq!(service.completed(), completed_before + 1);
}

#[tokio::test]
async fn test_mutation_result_after_screen_dropped_is_harmless() {
    let service = service_with_page(posts_by(&friend(), 1), None);
    let mut app = loaded_app(&service).await;

    service.hold(MockOp::Like);
    assert!(app.toggle_like(&PostId::new("p1")));
    let_tasks_run().await;
    drop(app);

    service.release(MockOp::Like);
    for _ in 0..50 {
        if service.completed() >= 3 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    // current user + first page + like
    assert_eq!(service.completed(), 3);
}

#[tokio::test]
async fn test_comment_flow_updates_count() {
    let service = service_with_page(posts_by(&friend(), 1), None);
    let mut app = loaded_app(&service).await;
    let id = PostId::new("p1");

    assert!(app.execute_command(Command::OpenDetail));
    pump(&mut app, 1).await;
    assert!(matches!(&app.overlay, Overlay::Detail(d) if !d.loading));

    for c in "Nice pace!".chars() {
        app.execute_command(Command::InsertChar(c));
    }
    assert!(app.execute_command(Command::Submit));
    pump(&mut app, 1).await;

    assert_eq!(
        service.calls().last(),
        Some(&RecordedCall::AddComment {
            post_id: id.clone(),
            body: "Nice pace!".to_string(),
        })
    );
    assert_eq!(app.feed.get(&id).unwrap().comment_count, 1);
    match &app.overlay {
        Overlay::Detail(detail) => {
            assert!(detail.draft.text().is_empty());
            assert_eq!(detail.comments.len(), 1);
        }
        other => panic!("detail closed unexpectedly: {:?}", other),
    }
}

#[tokio::test]
async fn test_compose_publishes_to_top_of_feed() {
    let service = service_with_page(posts_by(&friend(), 2), None);
    let mut app = loaded_app(&service).await;
    app.selected = 1;

    assert!(app.execute_command(Command::OpenCompose));
    for c in "Morning run".chars() {
        app.execute_command(Command::InsertChar(c));
    }
    app.execute_command(Command::NextField);
    for c in "run 30m 5km".chars() {
        app.execute_command(Command::InsertChar(c));
    }
    assert!(app.execute_command(Command::Submit));
    pump(&mut app, 1).await;

    assert!(!app.overlay.is_open());
    assert_eq!(app.feed.posts.len(), 3);
    let top = &app.feed.posts[0];
    assert_eq!(top.body, "Morning run");
    assert!(top.workout.is_some());
    assert!(app.feed.is_own_post(top));
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn test_compose_rejects_empty_body_without_request() {
    let service = MockFeedService::new();
    let mut app = loaded_app(&service).await;

    app.open_compose();
    assert!(!app.submit_compose());
    assert_eq!(service.count(MockOp::CreatePost), 0);
    match &app.overlay {
        Overlay::Compose(compose) => assert!(compose.error.is_some()),
        other => panic!("compose closed unexpectedly: {:?}", other),
    }
}
