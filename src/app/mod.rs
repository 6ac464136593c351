//! Application state and logic for the feed screen.
//!
//! [`App`] is the feed's view-model. It owns [`FeedState`], the overlay that
//! is presented over the feed, and the selection. Gestures are methods on
//! `App` (see `actions.rs`); each one that needs the backend spawns a task
//! which posts an [`AppMessage`] back to the UI task when it finishes.
//!
//! - [`Overlay`] - Which surface is presented over the feed
//! - [`AppMessage`] - Results of service calls

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::Overlay;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::state::FeedState;
use crate::traits::FeedService;

/// Posts requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Feed screen view-model
pub struct App {
    /// Feed collection, busy flags, cursor and pending mutations
    pub feed: FeedState,
    /// Surface presented over the feed
    pub overlay: Overlay,
    /// Index of the selected card
    pub selected: usize,
    /// Index of the first card in the viewport (kept in sync by the renderer)
    pub scroll_offset: usize,
    /// Index of the last card that fit in the viewport on the last frame
    pub last_visible: Option<usize>,
    /// Posts requested per page
    pub page_size: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes; the main loop redraws and clears it
    pub needs_redraw: bool,
    /// Tick counter for spinners
    pub tick_count: u64,
    /// Receiver for service results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for service results (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    service: Arc<dyn FeedService>,
    /// Read requests bound to the screen's lifetime
    reads: JoinSet<()>,
    /// Detached mutation tasks not yet answered by the service
    mutations: Arc<AtomicUsize>,
}

impl App {
    /// Create an app backed by `service`.
    pub fn new(service: Arc<dyn FeedService>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            feed: FeedState::new(),
            overlay: Overlay::None,
            selected: 0,
            scroll_offset: 0,
            last_visible: None,
            page_size: DEFAULT_PAGE_SIZE,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            service,
            reads: JoinSet::new(),
            mutations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the number of posts requested per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn service(&self) -> &Arc<dyn FeedService> {
        &self.service
    }

    /// Sender for posting results from outside the app.
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick and reap finished read tasks.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        while self.reads.try_join_next().is_some() {}
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Whether any spinner is on screen.
    pub fn is_busy(&self) -> bool {
        self.feed.is_loading
            || self.feed.is_refreshing
            || self.feed.is_loading_more
            || self.overlay.is_busy()
    }

    /// Number of read tasks still running.
    pub fn reads_in_flight(&self) -> usize {
        self.reads.len()
    }

    /// Number of mutations the service has not answered yet.
    pub fn mutations_in_flight(&self) -> usize {
        self.mutations.load(Ordering::Acquire)
    }

    /// Wait up to `timeout` for in-flight mutations to be answered.
    ///
    /// Called on exit before the runtime is dropped. Returns `true` if none
    /// are left.
    pub async fn settle_mutations(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.mutations_in_flight() > 0 {
            if tokio::time::Instant::now() >= deadline {
                tracing::warn!(
                    pending = self.mutations_in_flight(),
                    "exiting with mutations still in flight"
                );
                return false;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        true
    }

    /// Wait for the next service result and apply it.
    ///
    /// Returns `false` if the receiver was taken or every sender is gone.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Tear the screen down.
    ///
    /// In-flight reads are aborted and their results never applied. Mutations
    /// already sent keep running to completion on their own tasks.
    pub fn shutdown(&mut self) {
        let aborted = self.reads.len();
        self.reads.abort_all();
        self.should_quit = true;
        tracing::info!(aborted_reads = aborted, "feed screen shut down");
    }
}
