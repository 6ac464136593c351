//! State for the surfaces presented over the feed: post detail, compose
//! and friends list.

use crate::error::{FeedError, StrideError};
use crate::models::{
    Comment, Friend, NewComment, NewPost, PostId, Workout, MAX_COMMENT_CHARS, MAX_POST_CHARS,
};
use crate::widgets::TextInput;

/// Detail surface for one post: its comments and a comment draft.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub post_id: PostId,
    pub comments: Vec<Comment>,
    /// Comments are being fetched
    pub loading: bool,
    pub draft: TextInput<'static>,
    /// A comment is being posted
    pub submitting: bool,
    /// First visible comment
    pub scroll: usize,
    pub error: Option<String>,
}

impl DetailState {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            comments: Vec::new(),
            loading: true,
            draft: TextInput::with_limit(MAX_COMMENT_CHARS),
            submitting: false,
            scroll: 0,
            error: None,
        }
    }

    pub fn set_comments(&mut self, result: Result<Vec<Comment>, StrideError>) {
        self.loading = false;
        match result {
            Ok(comments) => {
                self.comments = comments;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    /// Validate the draft and mark it submitting.
    pub fn begin_submit(&mut self) -> Result<NewComment, FeedError> {
        let comment = NewComment::new(self.draft.text())?;
        self.submitting = true;
        self.error = None;
        Ok(comment)
    }

    pub fn finish_submit(&mut self, result: Result<Comment, StrideError>) -> bool {
        self.submitting = false;
        match result {
            Ok(comment) => {
                self.comments.push(comment);
                self.draft.clear();
                true
            }
            Err(err) => {
                self.error = Some(err.user_message());
                false
            }
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.comments.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Which compose field receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Body,
    Workout,
}

/// Compose surface: post body plus an optional workout line such as
/// `run 30m 5.2km`.
#[derive(Debug, Clone)]
pub struct ComposeState {
    pub body: TextInput<'static>,
    pub workout: TextInput<'static>,
    pub focus: ComposeField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeState {
    pub fn new() -> Self {
        Self {
            body: TextInput::with_limit(MAX_POST_CHARS),
            workout: TextInput::with_limit(40),
            focus: ComposeField::Body,
            submitting: false,
            error: None,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput<'static> {
        match self.focus {
            ComposeField::Body => &mut self.body,
            ComposeField::Workout => &mut self.workout,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ComposeField::Body => ComposeField::Workout,
            ComposeField::Workout => ComposeField::Body,
        };
    }

    /// Build the post to submit. A blank workout line means no workout.
    pub fn build(&self) -> Result<NewPost, FeedError> {
        let workout = match self.workout.text().trim() {
            "" => None,
            line => Some(line.parse::<Workout>()?),
        };
        NewPost::new(self.body.text(), workout)
    }

    /// Validate and mark submitting. Validation errors land in `error`.
    pub fn begin_submit(&mut self) -> Option<NewPost> {
        if self.submitting {
            return None;
        }
        match self.build() {
            Ok(post) => {
                self.submitting = true;
                self.error = None;
                Some(post)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }
}

/// Friends list surface.
#[derive(Debug, Clone, Default)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
    pub loading: bool,
    pub selected: usize,
    pub error: Option<String>,
}

impl FriendsState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn set_friends(&mut self, result: Result<Vec<Friend>, StrideError>) {
        self.loading = false;
        match result {
            Ok(friends) => {
                self.friends = friends;
                self.selected = 0;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.friends.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;

    fn type_into(input: &mut TextInput<'static>, s: &str) {
        for c in s.chars() {
            input.insert_char(c);
        }
    }

    #[test]
    fn test_compose_builds_post_with_workout() {
        let mut compose = ComposeState::new();
        type_into(&mut compose.body, "Tempo run");
        compose.toggle_focus();
        type_into(compose.focused_mut(), "run 30m 5.2km");

        let post = compose.begin_submit().unwrap();
        let workout = post.workout.unwrap();
        assert_eq!(workout.activity, ActivityKind::Run);
        assert_eq!(workout.duration_secs, 1800);
        assert_eq!(workout.distance_m, Some(5200));
        assert!(compose.submitting);
        assert!(compose.begin_submit().is_none());
    }

    #[test]
    fn test_compose_rejects_blank_body() {
        let mut compose = ComposeState::new();
        type_into(&mut compose.body, "   ");
        assert!(compose.begin_submit().is_none());
        assert!(compose.error.is_some());
        assert!(!compose.submitting);
    }

    #[test]
    fn test_compose_reports_bad_workout() {
        let mut compose = ComposeState::new();
        type_into(&mut compose.body, "Long ride");
        type_into(&mut compose.workout, "ride forever");
        assert!(compose.begin_submit().is_none());
        assert!(compose.error.is_some());
    }

    #[test]
    fn test_detail_comment_submit() {
        let mut detail = DetailState::new(PostId::new("p1"));
        assert!(detail.begin_submit().is_err());

        type_into(&mut detail.draft, "nice");
        let comment = detail.begin_submit().unwrap();
        assert_eq!(comment.body, "nice");
        assert!(detail.submitting);
    }

    #[test]
    fn test_friends_selection_is_bounded() {
        let mut friends = FriendsState::loading();
        friends.set_friends(Ok(vec![
            Friend {
                id: "u1".into(),
                display_name: "A".into(),
                handle: "a".into(),
                mutual_friends: 0,
            },
            Friend {
                id: "u2".into(),
                display_name: "B".into(),
                handle: "b".into(),
                mutual_friends: 1,
            },
        ]));
        friends.select_next();
        friends.select_next();
        assert_eq!(friends.selected, 1);
        friends.select_prev();
        friends.select_prev();
        assert_eq!(friends.selected, 0);
    }
}
