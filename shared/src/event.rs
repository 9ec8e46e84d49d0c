use serde::{Deserialize, Serialize};

use crate::cascade::CascadeConfig;
use crate::locations::LocationLevel;
use crate::model::FeedConfig;
use crate::posts::{
    AddCommentResponse, ApiError, CommentsResponse, DeletePostResponse, EditPostResponse,
    PostCard, PostKey, ToggleLikeResponse,
};

pub type ApiResult<T> = Result<T, ApiError>;

// --- Event enum: shell-originated first, HTTP completions last ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Page lifecycle
    PageLoaded {
        config: FeedConfig,
        /// Value of the hidden `csrfmiddlewaretoken` input, if the page has one.
        #[serde(default)]
        csrf_field: Option<String>,
        /// `document.cookie`.
        #[serde(default)]
        cookie: Option<String>,
    },

    // Location cascades
    CascadeMounted {
        form_id: String,
        #[serde(default)]
        config: CascadeConfig,
    },
    CascadeUnmounted {
        form_id: String,
    },
    LocationSelected {
        form_id: String,
        level: LocationLevel,
        value: Option<String>,
    },

    // Feed clicks
    Clicked {
        /// Class lists of the target and its ancestors, innermost first.
        class_chain: Vec<String>,
        card: Option<PostCard>,
        /// `data-index` of a clicked media thumbnail.
        #[serde(default)]
        media_index: Option<String>,
        /// The click landed inside an open actions menu.
        #[serde(default)]
        inside_menu: bool,
    },

    // Comments dialog
    CommentDraftChanged {
        text: String,
    },
    CommentSubmitted,
    CommentMediaClicked {
        index: Option<String>,
    },
    CommentsClosed,

    // Media viewer
    MediaNext,
    MediaPrev,
    MediaClosed,

    // Edit dialog
    EditDraftChanged {
        text: String,
    },
    EditSubmitted,
    EditCancelled,

    // Delete confirmation
    DeleteConfirmed,
    DeleteCancelled,

    ToastDismissed,

    // HTTP completions
    #[serde(skip)]
    LikeToggled {
        key: PostKey,
        result: ApiResult<ToggleLikeResponse>,
    },
    #[serde(skip)]
    CommentsLoaded {
        key: PostKey,
        result: ApiResult<CommentsResponse>,
    },
    #[serde(skip)]
    CommentAdded {
        key: PostKey,
        result: ApiResult<AddCommentResponse>,
    },
    #[serde(skip)]
    CommentsRefreshed {
        key: PostKey,
        result: ApiResult<CommentsResponse>,
    },
    #[serde(skip)]
    PostEdited {
        key: PostKey,
        result: ApiResult<EditPostResponse>,
    },
    #[serde(skip)]
    PostDeleted {
        key: PostKey,
        result: ApiResult<DeletePostResponse>,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PageLoaded { .. } => "page_loaded",
            Self::CascadeMounted { .. } => "cascade_mounted",
            Self::CascadeUnmounted { .. } => "cascade_unmounted",
            Self::LocationSelected { .. } => "location_selected",
            Self::Clicked { .. } => "clicked",
            Self::CommentDraftChanged { .. } => "comment_draft_changed",
            Self::CommentSubmitted => "comment_submitted",
            Self::CommentMediaClicked { .. } => "comment_media_clicked",
            Self::CommentsClosed => "comments_closed",
            Self::MediaNext => "media_next",
            Self::MediaPrev => "media_prev",
            Self::MediaClosed => "media_closed",
            Self::EditDraftChanged { .. } => "edit_draft_changed",
            Self::EditSubmitted => "edit_submitted",
            Self::EditCancelled => "edit_cancelled",
            Self::DeleteConfirmed => "delete_confirmed",
            Self::DeleteCancelled => "delete_cancelled",
            Self::ToastDismissed => "toast_dismissed",
            Self::LikeToggled { .. } => "like_toggled",
            Self::CommentsLoaded { .. } => "comments_loaded",
            Self::CommentAdded { .. } => "comment_added",
            Self::CommentsRefreshed { .. } => "comments_refreshed",
            Self::PostEdited { .. } => "post_edited",
            Self::PostDeleted { .. } => "post_deleted",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::LocationSelected { .. }
                | Self::Clicked { .. }
                | Self::CommentSubmitted
                | Self::CommentMediaClicked { .. }
                | Self::CommentsClosed
                | Self::MediaNext
                | Self::MediaPrev
                | Self::MediaClosed
                | Self::EditSubmitted
                | Self::EditCancelled
                | Self::DeleteConfirmed
                | Self::DeleteCancelled
                | Self::ToastDismissed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_events_deserialize() {
        let event: Event = serde_json::from_str(
            r#"{"LocationSelected": {"form_id": "signup", "level": "province", "value": "Agusan del Sur"}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            Event::LocationSelected {
                form_id: "signup".into(),
                level: LocationLevel::Province,
                value: Some("Agusan del Sur".into()),
            }
        );
        assert!(event.is_user_initiated());
    }

    #[test]
    fn test_click_defaults() {
        let event: Event = serde_json::from_str(
            r#"{"Clicked": {"class_chain": ["like-btn"], "card": {"post_id": "4", "server": true}}}"#,
        )
        .unwrap();
        let Event::Clicked {
            card,
            media_index,
            inside_menu,
            ..
        } = event
        else {
            panic!("expected a click");
        };
        assert_eq!(card.unwrap().post_id.as_deref(), Some("4"));
        assert!(media_index.is_none());
        assert!(!inside_menu);
    }

    #[test]
    fn test_completions_cannot_come_from_the_shell() {
        let result = serde_json::from_str::<Event>(r#"{"PostDeleted": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_names_are_snake_case() {
        assert_eq!(Event::MediaNext.name(), "media_next");
        assert_eq!(Event::DeleteConfirmed.name(), "delete_confirmed");
        assert!(!Event::ToastDismissed.name().contains(char::is_uppercase));
    }
}
