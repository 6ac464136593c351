//! In-process feed service.
//!
//! Backs `--demo` mode with a seeded, deterministic feed. It behaves like the
//! real API where it matters to the screen: cursor pagination, ownership
//! checks on delete, like counts and comment counts.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::{FeedError, NetworkError, StrideResult};
use crate::models::{
    ActivityKind, Author, Comment, CommentId, FeedPage, Friend, NewComment, NewPost, PostId,
    PostWithAuthor, UserId, Workout,
};
use crate::traits::FeedService;

#[derive(Debug, Default)]
struct MemoryStore {
    /// Newest first
    posts: Vec<PostWithAuthor>,
    comments: HashMap<PostId, Vec<Comment>>,
    likes: HashSet<PostId>,
    friends: Vec<Friend>,
}

/// Feed service that keeps everything in memory.
#[derive(Debug, Clone)]
pub struct MemoryFeedService {
    me: Author,
    store: Arc<Mutex<MemoryStore>>,
    latency: Duration,
}

impl MemoryFeedService {
    /// An empty feed for `me`.
    pub fn new(me: Author) -> Self {
        Self {
            me,
            store: Arc::new(Mutex::new(MemoryStore::default())),
            latency: Duration::ZERO,
        }
    }

    /// A feed seeded with demo posts, comments and friends.
    pub fn demo() -> Self {
        let me = Author::new("u-me", "You", "you");
        let service = Self::new(me.clone());
        {
            let mut store = service.lock();
            store.posts = demo_posts(&me, Utc::now());
            store.friends = demo_friends();
            if let Some(first) = store.posts.first().cloned() {
                let comment = Comment {
                    id: CommentId::new("c-1"),
                    post_id: first.id.clone(),
                    author: demo_authors()[1].clone(),
                    body: "Great pace!".to_string(),
                    created_at: first.created_at + ChronoDuration::minutes(5),
                };
                store.comments.insert(first.id.clone(), vec![comment]);
            }
            for post in store.posts.iter_mut() {
                post.comment_count = 0;
            }
            let counts: Vec<(PostId, u32)> = store
                .comments
                .iter()
                .map(|(id, list)| (id.clone(), list.len() as u32))
                .collect();
            for (id, count) in counts {
                if let Some(post) = store.posts.iter_mut().find(|p| p.id == id) {
                    post.comment_count = count;
                }
            }
        }
        service.with_latency(Duration::from_millis(350))
    }

    /// Delay every call, so loading states are visible in demo mode.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the stored posts. Posts are re-sorted newest first.
    pub fn with_posts(self, mut posts: Vec<PostWithAuthor>) -> Self {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        {
            let mut store = self.lock();
            store.likes = posts
                .iter()
                .filter(|p| p.liked_by_me)
                .map(|p| p.id.clone())
                .collect();
            store.posts = posts;
        }
        self
    }

    pub fn with_friends(self, friends: Vec<Friend>) -> Self {
        self.lock().friends = friends;
        self
    }

    /// Snapshot of the stored posts, newest first.
    pub fn posts(&self) -> Vec<PostWithAuthor> {
        self.lock().posts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryStore> {
        // A poisoned store only means a panicking test; the data is still usable.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_post<T>(
        &self,
        post_id: &PostId,
        f: impl FnOnce(&mut PostWithAuthor) -> T,
    ) -> StrideResult<T> {
        let mut store = self.lock();
        store
            .posts
            .iter_mut()
            .find(|p| &p.id == post_id)
            .map(f)
            .ok_or_else(|| {
                FeedError::PostNotFound {
                    post_id: post_id.clone(),
                }
                .into()
            })
    }
}

/// Cursor is `<created_at millis>:<post id>` of the last post on the previous
/// page. The next page resumes right after that post, so posts sharing its
/// timestamp are not skipped. If the post was deleted in between, paging
/// falls back to everything strictly older than the timestamp.
#[derive(Debug, Clone, PartialEq)]
struct FeedCursor {
    before: DateTime<Utc>,
    post_id: PostId,
}

impl FeedCursor {
    fn after(post: &PostWithAuthor) -> Self {
        Self {
            before: post.created_at,
            post_id: post.id.clone(),
        }
    }

    fn encode(&self) -> String {
        format!("{}:{}", self.before.timestamp_millis(), self.post_id)
    }

    fn decode(cursor: &str) -> StrideResult<Self> {
        cursor
            .split_once(':')
            .and_then(|(ms, id)| {
                let before = Utc.timestamp_millis_opt(ms.parse().ok()?).single()?;
                (!id.is_empty()).then(|| Self {
                    before,
                    post_id: PostId::new(id),
                })
            })
            .ok_or_else(|| {
                NetworkError::HttpStatus {
                    status: 400,
                    message: format!("invalid cursor '{}'", cursor),
                }
                .into()
            })
    }

    /// Index in the newest-first store where the next page starts.
    fn start_in(&self, posts: &[PostWithAuthor]) -> usize {
        match posts.iter().position(|p| p.id == self.post_id) {
            Some(idx) => idx + 1,
            None => posts
                .iter()
                .position(|p| p.created_at < self.before)
                .unwrap_or(posts.len()),
        }
    }
}

#[async_trait]
impl FeedService for MemoryFeedService {
    async fn current_user(&self) -> StrideResult<Author> {
        Ok(self.me.clone())
    }

    async fn fetch_feed(&self, cursor: Option<&str>, limit: usize) -> StrideResult<FeedPage> {
        self.simulate_latency().await;
        let cursor = cursor.map(FeedCursor::decode).transpose()?;

        let store = self.lock();
        let start = cursor.map_or(0, |c| c.start_in(&store.posts));
        let mut remaining = store.posts.iter().skip(start).peekable();

        let mut posts = Vec::with_capacity(limit);
        while posts.len() < limit {
            match remaining.next() {
                Some(post) => {
                    let mut post = post.clone();
                    post.liked_by_me = store.likes.contains(&post.id);
                    posts.push(post);
                }
                None => break,
            }
        }

        let next_cursor = match (remaining.peek(), posts.last()) {
            (Some(_), Some(last)) => Some(FeedCursor::after(last).encode()),
            _ => None,
        };
        Ok(FeedPage::new(posts, next_cursor))
    }

    async fn like_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.simulate_latency().await;
        self.with_post(post_id, |post| post.set_liked(true))?;
        self.lock().likes.insert(post_id.clone());
        Ok(())
    }

    async fn unlike_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.simulate_latency().await;
        self.with_post(post_id, |post| post.set_liked(false))?;
        self.lock().likes.remove(post_id);
        Ok(())
    }

    async fn delete_post(&self, post_id: &PostId) -> StrideResult<()> {
        self.simulate_latency().await;
        let owned = self.with_post(post_id, |post| post.is_authored_by(&self.me.id))?;
        if !owned {
            return Err(FeedError::NotAuthor {
                post_id: post_id.clone(),
            }
            .into());
        }

        let mut store = self.lock();
        store.posts.retain(|p| &p.id != post_id);
        store.comments.remove(post_id);
        store.likes.remove(post_id);
        Ok(())
    }

    async fn create_post(&self, post: &NewPost) -> StrideResult<PostWithAuthor> {
        self.simulate_latency().await;
        let created = PostWithAuthor {
            id: PostId::new(uuid::Uuid::new_v4().to_string()),
            author: self.me.clone(),
            body: post.body.clone(),
            workout: post.workout.clone(),
            created_at: Utc::now(),
            like_count: 0,
            comment_count: 0,
            liked_by_me: false,
        };
        self.lock().posts.insert(0, created.clone());
        Ok(created)
    }

    async fn fetch_comments(&self, post_id: &PostId) -> StrideResult<Vec<Comment>> {
        self.simulate_latency().await;
        self.with_post(post_id, |_| ())?;
        Ok(self.lock().comments.get(post_id).cloned().unwrap_or_default())
    }

    async fn add_comment(&self, post_id: &PostId, comment: &NewComment) -> StrideResult<Comment> {
        self.simulate_latency().await;
        self.with_post(post_id, |post| post.comment_count += 1)?;
        let created = Comment {
            id: CommentId::new(uuid::Uuid::new_v4().to_string()),
            post_id: post_id.clone(),
            author: self.me.clone(),
            body: comment.body.clone(),
            created_at: Utc::now(),
        };
        self.lock()
            .comments
            .entry(post_id.clone())
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn fetch_friends(&self) -> StrideResult<Vec<Friend>> {
        self.simulate_latency().await;
        Ok(self.lock().friends.clone())
    }
}

fn demo_authors() -> Vec<Author> {
    vec![
        Author::new("u-2", "Mara Okafor", "mara"),
        Author::new("u-3", "Jonas Lind", "jlind"),
        Author::new("u-4", "Priya Nair", "priya"),
        Author::new("u-5", "Sam Ortiz", "samo"),
    ]
}

fn demo_friends() -> Vec<Friend> {
    demo_authors()
        .into_iter()
        .enumerate()
        .map(|(i, a)| Friend {
            id: a.id,
            display_name: a.display_name,
            handle: a.handle,
            mutual_friends: (i as u32 + 1) * 3,
        })
        .collect()
}

fn demo_posts(me: &Author, newest: DateTime<Utc>) -> Vec<PostWithAuthor> {
    const BODIES: [(&str, ActivityKind, u32, Option<u32>); 8] = [
        ("Easy recovery run along the river", ActivityKind::Run, 2400, Some(6100)),
        ("Hill repeats, legs are done", ActivityKind::Run, 3300, Some(8400)),
        ("First open water swim of the season", ActivityKind::Swim, 1800, Some(1500)),
        ("Sunday long ride with the club", ActivityKind::Ride, 10800, Some(82000)),
        ("Deadlift PR!", ActivityKind::Strength, 3600, None),
        ("Sunrise flow before work", ActivityKind::Yoga, 1500, None),
        ("Trail loop with a view", ActivityKind::Hike, 7200, Some(11200)),
        ("Lunch walk, needed the air", ActivityKind::Walk, 1800, Some(2600)),
    ];

    let mut authors = demo_authors();
    authors.push(me.clone());

    (0..40)
        .map(|i| {
            let (body, activity, duration_secs, distance_m) = BODIES[i % BODIES.len()];
            PostWithAuthor {
                id: PostId::new(format!("p-{}", 1000 - i)),
                author: authors[i % authors.len()].clone(),
                body: body.to_string(),
                workout: Some(Workout {
                    activity,
                    duration_secs,
                    distance_m,
                }),
                created_at: newest - ChronoDuration::minutes(47 * i as i64),
                like_count: ((i * 7) % 13) as u32,
                comment_count: 0,
                liked_by_me: false,
            }
        })
        .collect()
}
