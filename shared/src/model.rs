use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::capabilities::{validate_header_name, ApiOrigin, ConfigError, CsrfToken, CSRF_HEADER};
use crate::cascade::{Cascade, Placeholders};
use crate::posts::{Comment, InFlight, MediaViewer, PostCard, PostKey, PostSummary};
use crate::{AppError, ToastMessage};

fn default_csrf_header() -> String {
    CSRF_HEADER.to_string()
}

/// Page-level settings handed over by the shell on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    pub api_origin: ApiOrigin,
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
    /// Used by cascades mounted without placeholders of their own.
    #[serde(default)]
    pub placeholders: Placeholders,
}

impl FeedConfig {
    #[must_use]
    pub fn new(api_origin: ApiOrigin) -> Self {
        Self {
            api_origin,
            csrf_header: default_csrf_header(),
            placeholders: Placeholders::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_header_name(&self.csrf_header)
    }
}

/// Server-confirmed state of one post card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    pub liked: bool,
    pub likes: u32,
    pub comment_count: u32,
    pub like_loading: bool,
    pub message: String,
    pub deleted: bool,
    /// Server-rendered markup that replaces the card after an edit.
    pub replacement_html: Option<String>,
}

impl CardState {
    #[must_use]
    pub fn from_card(card: &PostCard) -> Self {
        Self {
            liked: card.liked,
            likes: card.likes,
            comment_count: card.comment_count,
            message: card.message.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsDialog {
    pub post: PostKey,
    pub summary: PostSummary,
    pub comments: Vec<Comment>,
    pub count: u32,
    pub draft: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub post: PostKey,
    pub draft: String,
}

#[derive(Debug, Default)]
pub struct Model {
    pub initialized: bool,
    pub config: Option<FeedConfig>,
    pub csrf: Option<CsrfToken>,

    pub cascades: IndexMap<String, Cascade>,

    pub cards: IndexMap<PostKey, CardState>,
    pub in_flight: InFlight,
    pub open_menu: Option<PostKey>,

    pub comments: Option<CommentsDialog>,
    pub viewer: Option<MediaViewer>,
    pub edit: Option<EditDialog>,
    pub pending_delete: Option<PostKey>,

    pub toast: Option<ToastMessage>,
    pub last_error: Option<AppError>,
}

impl Model {
    /// The tracked state for `key`, seeded from the card the shell reported
    /// the first time the post is touched.
    pub fn card_mut(&mut self, key: &PostKey, card: &PostCard) -> &mut CardState {
        self.cards
            .entry(key.clone())
            .or_insert_with(|| CardState::from_card(card))
    }

    #[must_use]
    pub fn comments_open_for(&self, key: &PostKey) -> bool {
        self.comments.as_ref().is_some_and(|d| &d.post == key)
    }

    pub fn set_error(&mut self, error: AppError) {
        self.last_error = Some(error);
    }

    pub fn show_toast(&mut self, toast: ToastMessage) {
        self.toast = Some(toast);
    }
}
