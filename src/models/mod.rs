//! Feed data model.
//!
//! Wire types shared by the service adapters and the view-model. They
//! deserialize leniently (string-or-integer ids, defaulted counters) because
//! feed deployments disagree on the details.

mod comment;
mod friend;
mod ids;
mod page;
mod post;
mod workout;

pub use comment::{Comment, NewComment, MAX_COMMENT_CHARS};
pub use friend::Friend;
pub use ids::{CommentId, PostId, UserId};
pub use page::FeedPage;
pub use post::{Author, NewPost, PostWithAuthor, MAX_POST_CHARS};
pub use workout::{ActivityKind, Workout};
