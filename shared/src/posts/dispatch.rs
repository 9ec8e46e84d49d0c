use serde::{Deserialize, Serialize};

/// Interactive elements on a post card, identified by their marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiRole {
    LikeButton,
    CommentsButton,
    MediaThumbnail,
    ActionsMenuButton,
    EditButton,
    DeleteButton,
}

impl UiRole {
    /// In the order a click is matched against them.
    pub const ALL: [UiRole; 6] = [
        Self::LikeButton,
        Self::CommentsButton,
        Self::MediaThumbnail,
        Self::ActionsMenuButton,
        Self::EditButton,
        Self::DeleteButton,
    ];

    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::LikeButton => "like-btn",
            Self::CommentsButton => "comments-btn",
            Self::MediaThumbnail => "post-media",
            Self::ActionsMenuButton => "post-actions-btn",
            Self::EditButton => "edit-post-btn",
            Self::DeleteButton => "delete-post-btn",
        }
    }

    /// Classifies a click from the class lists of the target and its
    /// ancestors. Roles are tried in [`UiRole::ALL`] order and the first one
    /// whose marker appears anywhere in the chain wins.
    #[must_use]
    pub fn classify<S: AsRef<str>>(class_lists: &[S]) -> Option<Self> {
        Self::ALL.into_iter().find(|role| {
            class_lists.iter().any(|classes| {
                classes
                    .as_ref()
                    .split_ascii_whitespace()
                    .any(|class| class == role.marker())
            })
        })
    }
}

/// Whether a handler took ownership of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_element() {
        assert_eq!(
            UiRole::classify(&["like-btn flex items-center text-text-muted"]),
            Some(UiRole::LikeButton)
        );
        assert_eq!(
            UiRole::classify(&["block w-full delete-post-btn"]),
            Some(UiRole::DeleteButton)
        );
        assert_eq!(UiRole::classify(&["text-white"]), None);
        assert_eq!(UiRole::classify::<&str>(&[]), None);
    }

    #[test]
    fn test_classify_walks_ancestors() {
        let chain = ["", "like-count", "like-btn text-red-500", "post-card"];
        assert_eq!(UiRole::classify(&chain), Some(UiRole::LikeButton));
    }

    #[test]
    fn test_role_order_beats_depth() {
        let chain = ["edit-post-btn", "post-media"];
        assert_eq!(UiRole::classify(&chain), Some(UiRole::MediaThumbnail));
    }

    #[test]
    fn test_marker_must_match_whole_class() {
        assert_eq!(UiRole::classify(&["comment-like-btn"]), None);
        assert_eq!(UiRole::classify(&["post-media-grid"]), None);
    }

    #[test]
    fn test_markers_are_unique() {
        for a in UiRole::ALL {
            for b in UiRole::ALL {
                if a != b {
                    assert_ne!(a.marker(), b.marker());
                }
            }
        }
    }
}
