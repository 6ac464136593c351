//! Mock feed service for testing.
//!
//! Scripted feed pages, per-operation failures, and a gate that holds calls
//! in flight so tests can observe loading states and duplicate-request
//! guards.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use crate::error::{StrideError, StrideResult};
use crate::models::{
    Author, Comment, CommentId, FeedPage, Friend, NewComment, NewPost, PostId, PostWithAuthor,
};
use crate::traits::FeedService;

/// Service operations, used to target failures and holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOp {
    CurrentUser,
    FetchFeed,
    Like,
    Unlike,
    Delete,
    CreatePost,
    FetchComments,
    AddComment,
    FetchFriends,
}

/// A recorded call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CurrentUser,
    FetchFeed { cursor: Option<String>, limit: usize },
    Like(PostId),
    Unlike(PostId),
    Delete(PostId),
    CreatePost(NewPost),
    FetchComments(PostId),
    AddComment { post_id: PostId, body: String },
    FetchFriends,
}

impl RecordedCall {
    pub fn op(&self) -> MockOp {
        match self {
            RecordedCall::CurrentUser => MockOp::CurrentUser,
            RecordedCall::FetchFeed { .. } => MockOp::FetchFeed,
            RecordedCall::Like(_) => MockOp::Like,
            RecordedCall::Unlike(_) => MockOp::Unlike,
            RecordedCall::Delete(_) => MockOp::Delete,
            RecordedCall::CreatePost(_) => MockOp::CreatePost,
            RecordedCall::FetchComments(_) => MockOp::FetchComments,
            RecordedCall::AddComment { .. } => MockOp::AddComment,
            RecordedCall::FetchFriends => MockOp::FetchFriends,
        }
    }
}

/// Mock feed service for testing.
///
/// `fetch_feed` answers from a queue of scripted pages. Once the queue is
/// empty it returns an empty last page.
///
/// # Example
///
/// ```ignore
/// use stride::adapters::mock::{MockFeedService, MockOp};
///
/// let service = MockFeedService::new();
/// service.push_page(FeedPage::new(posts, Some("c1".into())));
/// service.hold(MockOp::FetchFeed);
/// // ... start a load, observe the spinner ...
/// service.release(MockOp::FetchFeed);
/// assert_eq!(service.count(MockOp::FetchFeed), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockFeedService {
    me: Arc<Mutex<Author>>,
    pages: Arc<Mutex<VecDeque<StrideResult<FeedPage>>>>,
    failures: Arc<Mutex<HashMap<MockOp, StrideError>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
    friends: Arc<Mutex<Vec<Friend>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    completed: Arc<AtomicUsize>,
    held: Arc<watch::Sender<HashSet<MockOp>>>,
}

impl MockFeedService {
    pub fn new() -> Self {
        let (held, _) = watch::channel(HashSet::new());
        Self {
            me: Arc::new(Mutex::new(Author::new("u-me", "Me", "me"))),
            pages: Arc::new(Mutex::new(VecDeque::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            comments: Arc::new(Mutex::new(Vec::new())),
            friends: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            completed: Arc::new(AtomicUsize::new(0)),
            held: Arc::new(held),
        }
    }

    pub fn set_current_user(&self, me: Author) {
        *self.me.lock().unwrap() = me;
    }

    /// Queue the next `fetch_feed` response.
    pub fn push_page(&self, page: FeedPage) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    /// Queue a failing `fetch_feed` response.
    pub fn push_page_error(&self, err: impl Into<StrideError>) {
        self.pages.lock().unwrap().push_back(Err(err.into()));
    }

    /// Make every call to `op` fail with `err` until [`Self::clear_failure`].
    pub fn fail(&self, op: MockOp, err: impl Into<StrideError>) {
        self.failures.lock().unwrap().insert(op, err.into());
    }

    pub fn clear_failure(&self, op: MockOp) {
        self.failures.lock().unwrap().remove(&op);
    }

    pub fn set_comments(&self, comments: Vec<Comment>) {
        *self.comments.lock().unwrap() = comments;
    }

    pub fn set_friends(&self, friends: Vec<Friend>) {
        *self.friends.lock().unwrap() = friends;
    }

    /// Block calls to `op` until [`Self::release`].
    ///
    /// Calls are recorded before they block, so they show up in
    /// [`Self::calls`] while in flight.
    pub fn hold(&self, op: MockOp) {
        self.held.send_modify(|held| {
            held.insert(op);
        });
    }

    pub fn release(&self, op: MockOp) {
        self.held.send_modify(|held| {
            held.remove(&op);
        });
    }

    /// All recorded calls, in the order they started.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of started calls to `op`.
    pub fn count(&self, op: MockOp) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    /// Number of calls that have returned.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Record the call, wait while held, then report a configured failure.
    async fn enter(&self, call: RecordedCall) -> StrideResult<()> {
        let op = call.op();
        self.calls.lock().unwrap().push(call);

        let mut rx = self.held.subscribe();
        // The sender lives as long as `self`, so this only errs on teardown.
        let _ = rx.wait_for(|held| !held.contains(&op)).await;

        match self.failures.lock().unwrap().get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn finish<T>(&self, result: StrideResult<T>) -> StrideResult<T> {
        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }

    async fn run<T>(
        &self,
        call: RecordedCall,
        f: impl FnOnce(&Self) -> StrideResult<T>,
    ) -> StrideResult<T> {
        let result = match self.enter(call).await {
            Ok(()) => f(self),
            Err(err) => Err(err),
        };
        self.finish(result)
    }
}

impl Default for MockFeedService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedService for MockFeedService {
    async fn current_user(&self) -> StrideResult<Author> {
        self.run(RecordedCall::CurrentUser, |s| Ok(s.me.lock().unwrap().clone()))
            .await
    }

    async fn fetch_feed(&self, cursor: Option<&str>, limit: usize) -> StrideResult<FeedPage> {
        let call = RecordedCall::FetchFeed {
            cursor: cursor.map(str::to_string),
            limit,
        };
        self.run(call, |s| {
            s.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(FeedPage::new(Vec::new(), None)))
        })
        .await
    }

    async fn like_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.run(RecordedCall::Like(post_id.clone()), |_| Ok(())).await
    }

    async fn unlike_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.run(RecordedCall::Unlike(post_id.clone()), |_| Ok(())).await
    }

    async fn delete_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.run(RecordedCall::Delete(post_id.clone()), |_| Ok(())).await
    }

    async fn create_post(&self, post: &NewPost) -> StrideResult<PostWithAuthor> {
        let created_count = self.count(MockOp::CreatePost) + 1;
        self.run(RecordedCall::CreatePost(post.clone()), |s| {
            Ok(PostWithAuthor {
                id: PostId::new(format!("new-{}", created_count)),
                author: s.me.lock().unwrap().clone(),
                body: post.body.clone(),
                workout: post.workout.clone(),
                created_at: Utc::now(),
                like_count: 0,
                comment_count: 0,
                liked_by_me: false,
            })
        })
        .await
    }

    async fn fetch_comments(&self, post_id: &PostId) -> StrideResult<Vec<Comment>> {
        self.run(RecordedCall::FetchComments(post_id.clone()), |s| {
            Ok(s.comments
                .lock()
                .unwrap()
                .iter()
                .filter(|c| &c.post_id == post_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn add_comment(&self, post_id: &PostId, comment: &NewComment) -> StrideResult<Comment> {
        let call = RecordedCall::AddComment {
            post_id: post_id.clone(),
            body: comment.body.clone(),
        };
        self.run(call, |s| {
            let created = Comment {
                id: CommentId::new(format!("c-{}", s.comments.lock().unwrap().len() + 1)),
                post_id: post_id.clone(),
                author: s.me.lock().unwrap().clone(),
                body: comment.body.clone(),
                created_at: Utc::now(),
            };
            s.comments.lock().unwrap().push(created.clone());
            Ok(created)
        })
        .await
    }

    async fn fetch_friends(&self) -> StrideResult<Vec<Friend>> {
        self.run(RecordedCall::FetchFriends, |s| {
            Ok(s.friends.lock().unwrap().clone())
        })
        .await
    }
}
