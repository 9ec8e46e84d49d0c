//! Post cards in the feed and the bookkeeping shared by every interaction.

pub mod api;
pub mod dispatch;
pub mod format;
pub mod media;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::api::{
    AddCommentResponse, ApiError, ApiReply, Comment, CommentsResponse, DeletePostResponse,
    EditPost, EditPostResponse, Endpoint, NewComment, PostSummary, ToggleLikeResponse,
};
pub use self::dispatch::{Handled, UiRole};
pub use self::format::format_location;
pub use self::media::{MediaKind, MediaViewer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    #[default]
    Property,
    Student,
}

impl PostCategory {
    /// Reads a card's `data-source`; anything other than `student` is a
    /// property post.
    #[must_use]
    pub fn from_source(source: Option<&str>) -> Self {
        match source.map(str::trim) {
            Some("student") => Self::Student,
            _ => Self::Property,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Student => "student",
        }
    }

    #[must_use]
    pub const fn api_base(self) -> &'static str {
        match self {
            Self::Property => "/properties",
            Self::Student => "/students",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    /// Ids end up in request paths, so only non-empty ASCII alphanumerics,
    /// `-` and `_` are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a post across both feeds; ids are only unique per category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostKey {
    pub category: PostCategory,
    pub id: PostId,
}

impl PostKey {
    #[must_use]
    pub fn new(category: PostCategory, id: PostId) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.id)
    }
}

/// What the shell reports about the card that owns a clicked element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostCard {
    pub post_id: Option<String>,
    pub source: Option<String>,
    /// Cards rendered from server data; optimistic local cards are not.
    pub server: bool,
    /// Raw `data-images` attribute, a JSON array of URLs.
    pub images: Option<String>,
    pub message: String,
    pub liked: bool,
    pub likes: u32,
    pub comment_count: u32,
}

impl PostCard {
    /// The key of a card that may be sent to the server.
    #[must_use]
    pub fn resolve(&self) -> Option<PostKey> {
        if !self.server {
            return None;
        }
        self.key()
    }

    /// The key regardless of whether the card is server-backed.
    #[must_use]
    pub fn key(&self) -> Option<PostKey> {
        let id = PostId::parse(self.post_id.as_deref()?)?;
        Some(PostKey::new(
            PostCategory::from_source(self.source.as_deref()),
            id,
        ))
    }

    /// Media URLs in display order; a malformed attribute yields none.
    #[must_use]
    pub fn media(&self) -> Vec<String> {
        let Some(raw) = self.images.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(urls) => urls,
            Err(e) => {
                debug!(error = %e, "ignoring malformed data-images attribute");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    ToggleLike,
    LoadComments,
    AddComment,
    Edit,
    Delete,
}

impl PostAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggleLike => "toggle_like",
            Self::LoadComments => "load_comments",
            Self::AddComment => "add_comment",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Requests awaiting a response, one slot per post and action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    pending: HashSet<(PostKey, PostAction)>,
}

impl InFlight {
    /// Claims the slot; `false` means a request is already outstanding.
    pub fn try_begin(&mut self, key: &PostKey, action: PostAction) -> bool {
        self.pending.insert((key.clone(), action))
    }

    pub fn finish(&mut self, key: &PostKey, action: PostAction) {
        self.pending.remove(&(key.clone(), action));
    }

    #[must_use]
    pub fn contains(&self, key: &PostKey, action: PostAction) -> bool {
        self.pending.contains(&(key.clone(), action))
    }
}
