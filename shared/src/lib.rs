// lib.rs - shared core for the boarding-house feed

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod capabilities;
pub mod cascade;
pub mod event;
pub mod locations;
pub mod model;
pub mod posts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use cascade::{Cascade, CascadeChange, CascadeConfig, Placeholders, SelectWidget, SelectionState};
pub use crux_core::App as CruxApp;
pub use event::Event;
pub use locations::{LocationError, LocationLevel, LocationTable};
pub use model::{CardState, FeedConfig, Model};
pub use posts::{MediaKind, PostCard, PostCategory, PostKey, UiRole};

pub const TOAST_LIKE_FAILED: &str = "Unable to update reaction.";
pub const TOAST_COMMENTS_FAILED: &str = "Unable to load comments.";
pub const TOAST_COMMENT_POSTED: &str = "Comment posted.";
pub const TOAST_COMMENT_FAILED: &str = "Unable to post comment.";
pub const TOAST_POST_UPDATED: &str = "Post updated successfully.";
pub const TOAST_UPDATE_FAILED: &str = "Unable to update post.";
pub const TOAST_POST_DELETED: &str = "Post deleted successfully.";
pub const TOAST_DELETE_FAILED: &str = "Unable to delete post.";

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this post? This action cannot be undone.";

pub const LIKED_CLASS: &str = "text-red-500";
pub const UNLIKED_CLASS: &str = "text-text-muted";
pub const LIKED_FILL: &str = "currentColor";
pub const UNLIKED_FILL: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Network,
    Authentication,
    Authorization,
    Validation,
    NotFound,
    Conflict,
    RateLimited,
    Server,
    Deserialization,
    Rejected,
    Configuration,
    InvalidState,
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Authentication => "AUTH_ERROR",
            Self::Authorization => "FORBIDDEN",
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::RateLimited => "RATE_LIMITED",
            Self::Server => "SERVER_ERROR",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::Rejected => "REJECTED",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::InvalidState => "INVALID_STATE",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Network | Self::Conflict | Self::RateLimited | Self::Server => {
                ErrorSeverity::Transient
            }

            Self::Configuration | Self::InvalidState => ErrorSeverity::Fatal,

            Self::Authentication
            | Self::Authorization
            | Self::Validation
            | Self::NotFound
            | Self::Deserialization
            | Self::Rejected
            | Self::Unknown => ErrorSeverity::Permanent,
        }
    }

    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Network | Self::RateLimited | Self::Conflict | Self::Server
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    pub internal_message: Option<String>,
    pub context: HashMap<String, String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            internal_message: None,
            context: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable() && !matches!(self.severity, ErrorSeverity::Fatal)
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Network => {
                "Unable to connect. Please check your internet connection and try again.".into()
            }
            ErrorKind::Authentication => "Your session has expired. Please sign in again.".into(),
            ErrorKind::Authorization => {
                "You don't have permission to perform this action.".into()
            }
            ErrorKind::Validation | ErrorKind::Rejected => self.message.clone(),
            ErrorKind::NotFound => "This post could not be found. It may have been removed.".into(),
            ErrorKind::Conflict => {
                "This post changed while you were viewing it. Please refresh and try again.".into()
            }
            ErrorKind::RateLimited => "Too many requests. Please wait a moment and try again.".into(),
            ErrorKind::Server => "The server ran into a problem. Please try again later.".into(),
            ErrorKind::Deserialization => {
                "A data error occurred. Please contact support if this persists.".into()
            }
            ErrorKind::Configuration => {
                "This page is misconfigured. Please reload and try again.".into()
            }
            ErrorKind::InvalidState | ErrorKind::Unknown => {
                "Something went wrong. Please try again.".into()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: kind.default_duration_ms(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

// --- View model ---

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserFacingError {
    pub message: String,
    pub is_transient: bool,
    pub is_retryable: bool,
    pub error_code: String,
}

impl From<&AppError> for UserFacingError {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.user_facing_message(),
            is_transient: e.severity == ErrorSeverity::Transient,
            is_retryable: e.is_retryable(),
            error_code: e.code().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl From<&ToastMessage> for ToastView {
    fn from(t: &ToastMessage) -> Self {
        Self {
            message: t.message.clone(),
            kind: t.kind,
            duration_ms: t.duration_ms,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CascadeView {
    pub form_id: String,
    /// Region, province, city and barangay, in that order.
    pub widgets: Vec<SelectWidget>,
    pub selection: SelectionState,
}

/// Patch for one post card in the feed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    pub post: PostKey,
    pub liked: bool,
    pub likes: u32,
    pub like_class: String,
    pub like_fill: String,
    pub like_loading: bool,
    pub comments_label: String,
    pub menu_open: bool,
    pub deleted: bool,
    pub replacement_html: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub author_initial: String,
    pub author_picture: Option<String>,
    pub text: String,
    pub timestamp: String,
    pub liked: bool,
    pub like_fill: String,
    pub likes: u32,
    pub is_author: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommentsView {
    pub post: PostKey,
    pub author_name: String,
    pub author_initial: String,
    pub author_picture: Option<String>,
    pub location: String,
    pub timestamp: String,
    pub message: String,
    pub images: Vec<String>,
    pub comments: Vec<CommentView>,
    pub count: u32,
    pub draft: String,
    pub can_submit: bool,
    pub is_submitting: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MediaViewerView {
    pub url: String,
    pub kind: MediaKind,
    pub counter: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EditView {
    pub post: PostKey,
    pub draft: String,
    pub can_submit: bool,
    pub is_saving: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeletePromptView {
    pub post: PostKey,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub initialized: bool,
    pub cascades: Vec<CascadeView>,
    pub cards: Vec<CardView>,
    pub open_menu: Option<PostKey>,
    pub comments: Option<CommentsView>,
    pub viewer: Option<MediaViewerView>,
    pub edit: Option<EditView>,
    pub delete_prompt: Option<DeletePromptView>,
    pub toast: Option<ToastView>,
    pub error: Option<UserFacingError>,
}

fn initial_of(name: &str, fallback: char) -> String {
    name.chars()
        .next()
        .unwrap_or(fallback)
        .to_uppercase()
        .collect()
}

fn like_style(liked: bool) -> (&'static str, &'static str) {
    if liked {
        (LIKED_CLASS, LIKED_FILL)
    } else {
        (UNLIKED_CLASS, UNLIKED_FILL)
    }
}

pub mod app {
    use super::*;
    use std::sync::Arc;

    use tracing::{debug, error, info, warn};

    use crate::capabilities::{Capabilities, CsrfToken, HttpMethod};
    use crate::model::{CommentsDialog, EditDialog};
    use crate::posts::{
        api::confirmed, format_location, ApiError, Comment, EditPost, Endpoint, Handled,
        MediaViewer, NewComment, PostAction,
    };

    type Handler = fn(&mut Model, &Capabilities, &PostCard, Option<&str>) -> Handled;

    /// Click handlers keyed by the role of the clicked element.
    const DISPATCH: [(UiRole, Handler); 6] = [
        (UiRole::LikeButton, App::on_like_clicked),
        (UiRole::CommentsButton, App::on_comments_clicked),
        (UiRole::MediaThumbnail, App::on_media_clicked),
        (UiRole::ActionsMenuButton, App::on_actions_clicked),
        (UiRole::EditButton, App::on_edit_clicked),
        (UiRole::DeleteButton, App::on_delete_clicked),
    ];

    #[derive(Default)]
    pub struct App;

    impl App {
        fn handler_for(role: UiRole) -> Option<Handler> {
            DISPATCH
                .iter()
                .find(|(r, _)| *r == role)
                .map(|(_, handler)| *handler)
        }

        /// A request to `endpoint` for `key`, carrying the CSRF header. `None`
        /// until the page configuration has arrived.
        fn request(
            model: &Model,
            caps: &Capabilities,
            endpoint: Endpoint,
            key: &PostKey,
        ) -> Option<crux_http::RequestBuilder<Event>> {
            let Some(config) = model.config.as_ref() else {
                warn!(post = %key, endpoint = ?endpoint, "request before page configuration");
                return None;
            };

            let url = config.api_origin.join(&endpoint.path(key));
            let method = endpoint.method();
            let builder = match method {
                HttpMethod::Get => caps.http.get(url),
                HttpMethod::Post => caps.http.post(url),
                HttpMethod::Put => caps.http.put(url),
                HttpMethod::Delete => caps.http.delete(url),
            };

            match model.csrf.as_ref() {
                Some(token) => Some(builder.header(config.csrf_header.as_str(), token.expose())),
                None => {
                    warn!(post = %key, "sending {} without a CSRF token", method.as_str());
                    Some(builder)
                }
            }
        }

        fn fail(model: &mut Model, key: &PostKey, action: PostAction, e: ApiError, toast: &str) {
            error!(post = %key, action = action.as_str(), error = %e, "post interaction failed");
            model.set_error(
                AppError::from(e)
                    .with_context("post", key.to_string())
                    .with_context("action", action.as_str()),
            );
            model.show_toast(ToastMessage::error(toast));
        }

        // --- Page & cascades ---

        fn on_page_loaded(
            model: &mut Model,
            config: FeedConfig,
            csrf_field: Option<&str>,
            cookie: Option<&str>,
        ) {
            if model.initialized {
                debug!("page already initialized, ignoring repeat load");
                return;
            }

            if let Err(e) = config.validate() {
                error!(error = %e, "rejecting feed configuration");
                model.set_error(
                    AppError::new(ErrorKind::Configuration, e.to_string())
                        .with_internal(format!("{e:?}")),
                );
                return;
            }

            model.csrf = match CsrfToken::resolve(csrf_field, cookie) {
                Ok(Some(token)) => Some(token),
                Ok(None) => {
                    warn!("no CSRF token on page; API requests will be rejected");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "ignoring malformed CSRF token");
                    None
                }
            };

            info!(origin = config.api_origin.as_str(), "feed initialized");
            model.config = Some(config);
            model.initialized = true;
        }

        fn on_cascade_mounted(model: &mut Model, form_id: String, mut config: CascadeConfig) {
            if config.placeholders == Placeholders::default() {
                if let Some(feed) = model.config.as_ref() {
                    config.placeholders = feed.placeholders.clone();
                }
            }

            let cascade = Cascade::new(Arc::clone(LocationTable::caraga()), &config);
            debug!(form = %form_id, selection = ?cascade.selection(), "cascade mounted");
            if model.cascades.insert(form_id.clone(), cascade).is_some() {
                debug!(form = %form_id, "replaced existing cascade");
            }
        }

        fn on_location_selected(
            model: &mut Model,
            form_id: &str,
            level: LocationLevel,
            value: Option<&str>,
        ) {
            let Some(cascade) = model.cascades.get_mut(form_id) else {
                warn!(form = form_id, level = %level, "selection for unknown cascade");
                return;
            };
            let change = cascade.select(level, value);
            debug!(form = form_id, level = %change.level, complete = change.selection.is_complete(), "location changed");
        }

        // --- Click handlers ---

        fn on_like_clicked(
            model: &mut Model,
            caps: &Capabilities,
            card: &PostCard,
            _: Option<&str>,
        ) -> Handled {
            let Some(key) = card.resolve() else {
                return Handled::No;
            };
            let Some(request) = Self::request(model, caps, Endpoint::ToggleLike, &key) else {
                return Handled::No;
            };
            if !model.in_flight.try_begin(&key, PostAction::ToggleLike) {
                debug!(post = %key, "like already in flight");
                return Handled::Yes;
            }

            model.card_mut(&key, card).like_loading = true;
            let event_key = key.clone();
            request
                .expect_json::<posts::ToggleLikeResponse>()
                .send(move |result| Event::LikeToggled {
                    key: event_key,
                    result: confirmed(result),
                });
            Handled::Yes
        }

        fn on_comments_clicked(
            model: &mut Model,
            caps: &Capabilities,
            card: &PostCard,
            _: Option<&str>,
        ) -> Handled {
            let Some(key) = card.resolve() else {
                return Handled::No;
            };
            let Some(request) = Self::request(model, caps, Endpoint::Comments, &key) else {
                return Handled::No;
            };
            if !model.in_flight.try_begin(&key, PostAction::LoadComments) {
                debug!(post = %key, "comments already loading");
                return Handled::Yes;
            }

            model.card_mut(&key, card);
            let event_key = key.clone();
            request
                .expect_json::<posts::CommentsResponse>()
                .send(move |result| Event::CommentsLoaded {
                    key: event_key,
                    result: confirmed(result),
                });
            Handled::Yes
        }

        fn on_media_clicked(
            model: &mut Model,
            _: &Capabilities,
            card: &PostCard,
            media_index: Option<&str>,
        ) -> Handled {
            let Some(key) = card.resolve() else {
                return Handled::No;
            };
            match MediaViewer::open(card.media(), media_index) {
                Some(viewer) => model.viewer = Some(viewer),
                None => debug!(post = %key, "post has no media to show"),
            }
            Handled::Yes
        }

        fn on_actions_clicked(
            model: &mut Model,
            _: &Capabilities,
            card: &PostCard,
            _: Option<&str>,
        ) -> Handled {
            let Some(key) = card.key() else {
                return Handled::No;
            };
            model.open_menu = match model.open_menu.take() {
                Some(open) if open == key => None,
                _ => Some(key),
            };
            Handled::Yes
        }

        fn on_edit_clicked(
            model: &mut Model,
            _: &Capabilities,
            card: &PostCard,
            _: Option<&str>,
        ) -> Handled {
            let Some(key) = card.resolve() else {
                return Handled::No;
            };
            let draft = model.card_mut(&key, card).message.clone();
            model.open_menu = None;
            model.edit = Some(EditDialog { post: key, draft });
            Handled::Yes
        }

        fn on_delete_clicked(
            model: &mut Model,
            _: &Capabilities,
            card: &PostCard,
            _: Option<&str>,
        ) -> Handled {
            let Some(key) = card.resolve() else {
                return Handled::No;
            };
            model.card_mut(&key, card);
            model.open_menu = None;
            model.pending_delete = Some(key);
            Handled::Yes
        }

        fn on_clicked(
            model: &mut Model,
            caps: &Capabilities,
            class_chain: &[String],
            card: Option<&PostCard>,
            media_index: Option<&str>,
            inside_menu: bool,
        ) {
            let role = UiRole::classify(class_chain);

            if let (Some(role), Some(card)) = (role, card) {
                if let Some(handler) = Self::handler_for(role) {
                    if handler(model, caps, card, media_index).is_handled() {
                        debug!(role = ?role, "click handled");
                        return;
                    }
                }
            }

            if role != Some(UiRole::ActionsMenuButton) && !inside_menu && model.open_menu.take().is_some() {
                debug!("closed actions menu on outside click");
            }
        }

        // --- Comments dialog ---

        fn on_comment_submitted(model: &mut Model, caps: &Capabilities) {
            let Some(dialog) = model.comments.as_ref() else {
                debug!("comment submitted with no dialog open");
                return;
            };
            let text = dialog.draft.trim().to_string();
            if text.is_empty() {
                return;
            }
            let key = dialog.post.clone();

            let Some(request) = Self::request(model, caps, Endpoint::AddComment, &key) else {
                return;
            };
            let request = match request.body_json(&NewComment { text }) {
                Ok(request) => request,
                Err(e) => {
                    Self::fail(
                        model,
                        &key,
                        PostAction::AddComment,
                        ApiError::from(e),
                        TOAST_COMMENT_FAILED,
                    );
                    return;
                }
            };
            if !model.in_flight.try_begin(&key, PostAction::AddComment) {
                debug!(post = %key, "comment already being posted");
                return;
            }

            let event_key = key.clone();
            request
                .expect_json::<posts::AddCommentResponse>()
                .send(move |result| Event::CommentAdded {
                    key: event_key,
                    result: confirmed(result),
                });
        }

        fn refresh_comments(model: &Model, caps: &Capabilities, key: &PostKey) {
            let Some(request) = Self::request(model, caps, Endpoint::Comments, key) else {
                return;
            };
            let event_key = key.clone();
            request
                .expect_json::<posts::CommentsResponse>()
                .send(move |result| Event::CommentsRefreshed {
                    key: event_key,
                    result: confirmed(result),
                });
        }

        // --- Edit & delete ---

        fn on_edit_submitted(model: &mut Model, caps: &Capabilities) {
            let Some(dialog) = model.edit.as_ref() else {
                debug!("edit submitted with no dialog open");
                return;
            };
            let message = dialog.draft.trim().to_string();
            if message.is_empty() {
                return;
            }
            let key = dialog.post.clone();

            let Some(request) = Self::request(model, caps, Endpoint::Edit, &key) else {
                return;
            };
            let request = match request.body_json(&EditPost { message }) {
                Ok(request) => request,
                Err(e) => {
                    Self::fail(
                        model,
                        &key,
                        PostAction::Edit,
                        ApiError::from(e),
                        TOAST_UPDATE_FAILED,
                    );
                    return;
                }
            };
            if !model.in_flight.try_begin(&key, PostAction::Edit) {
                debug!(post = %key, "edit already in flight");
                return;
            }

            let event_key = key.clone();
            request
                .expect_json::<posts::EditPostResponse>()
                .send(move |result| Event::PostEdited {
                    key: event_key,
                    result: confirmed(result),
                });
        }

        fn on_delete_confirmed(model: &mut Model, caps: &Capabilities) {
            let Some(key) = model.pending_delete.take() else {
                debug!("delete confirmed with nothing pending");
                return;
            };
            let Some(request) = Self::request(model, caps, Endpoint::Delete, &key) else {
                return;
            };
            if !model.in_flight.try_begin(&key, PostAction::Delete) {
                debug!(post = %key, "delete already in flight");
                return;
            }

            let event_key = key.clone();
            request
                .expect_json::<posts::DeletePostResponse>()
                .send(move |result| Event::PostDeleted {
                    key: event_key,
                    result: confirmed(result),
                });
        }

        // --- Views ---

        fn card_view(key: &PostKey, state: &CardState, open_menu: Option<&PostKey>) -> CardView {
            let (like_class, like_fill) = like_style(state.liked);
            CardView {
                post: key.clone(),
                liked: state.liked,
                likes: state.likes,
                like_class: like_class.into(),
                like_fill: like_fill.into(),
                like_loading: state.like_loading,
                comments_label: format!("Comments ({})", state.comment_count),
                menu_open: open_menu == Some(key),
                deleted: state.deleted,
                replacement_html: state.replacement_html.clone(),
            }
        }

        fn comment_view(comment: &Comment) -> CommentView {
            let author = comment.author.clone().unwrap_or_else(|| "Anonymous".into());
            let id = match &comment.id {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            CommentView {
                id,
                author_initial: initial_of(comment.author.as_deref().unwrap_or_default(), 'A'),
                author,
                author_picture: comment
                    .author_profile_picture
                    .clone()
                    .filter(|p| !p.is_empty()),
                text: comment.text.clone(),
                timestamp: comment.timestamp.clone().unwrap_or_default(),
                liked: comment.liked,
                like_fill: like_style(comment.liked).1.into(),
                likes: comment.likes,
                is_author: comment.is_author,
            }
        }

        fn comments_view(model: &Model, dialog: &CommentsDialog) -> CommentsView {
            let summary = &dialog.summary;
            let name = summary.author_name.as_deref().unwrap_or_default();
            CommentsView {
                post: dialog.post.clone(),
                author_name: if name.is_empty() { "Anonymous".into() } else { name.into() },
                author_initial: initial_of(name, 'U'),
                author_picture: summary
                    .author_profile_picture
                    .clone()
                    .filter(|p| !p.is_empty()),
                location: summary
                    .location
                    .as_ref()
                    .map(format_location)
                    .unwrap_or_default(),
                timestamp: summary.timestamp.clone().unwrap_or_default(),
                message: summary.message.clone(),
                images: summary.images.clone(),
                comments: dialog.comments.iter().map(Self::comment_view).collect(),
                count: dialog.count,
                draft: dialog.draft.clone(),
                can_submit: !dialog.draft.trim().is_empty(),
                is_submitting: model.in_flight.contains(&dialog.post, PostAction::AddComment),
            }
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            debug!(event = event.name(), user = event.is_user_initiated(), "update");

            match event {
                Event::PageLoaded {
                    config,
                    csrf_field,
                    cookie,
                } => {
                    Self::on_page_loaded(model, config, csrf_field.as_deref(), cookie.as_deref());
                }

                Event::CascadeMounted { form_id, config } => {
                    Self::on_cascade_mounted(model, form_id, config);
                }

                Event::CascadeUnmounted { form_id } => {
                    model.cascades.shift_remove(&form_id);
                }

                Event::LocationSelected {
                    form_id,
                    level,
                    value,
                } => {
                    Self::on_location_selected(model, &form_id, level, value.as_deref());
                }

                Event::Clicked {
                    class_chain,
                    card,
                    media_index,
                    inside_menu,
                } => {
                    Self::on_clicked(
                        model,
                        caps,
                        &class_chain,
                        card.as_ref(),
                        media_index.as_deref(),
                        inside_menu,
                    );
                }

                Event::CommentDraftChanged { text } => {
                    if let Some(dialog) = model.comments.as_mut() {
                        dialog.draft = text;
                    }
                }

                Event::CommentSubmitted => Self::on_comment_submitted(model, caps),

                Event::CommentMediaClicked { index } => {
                    let images = model
                        .comments
                        .as_ref()
                        .map(|d| d.summary.images.clone())
                        .unwrap_or_default();
                    if let Some(viewer) = MediaViewer::open(images, index.as_deref()) {
                        model.viewer = Some(viewer);
                    }
                }

                Event::CommentsClosed => {
                    model.comments = None;
                }

                Event::MediaNext => {
                    if let Some(viewer) = model.viewer.as_mut() {
                        viewer.next();
                    }
                }

                Event::MediaPrev => {
                    if let Some(viewer) = model.viewer.as_mut() {
                        viewer.prev();
                    }
                }

                Event::MediaClosed => {
                    model.viewer = None;
                }

                Event::EditDraftChanged { text } => {
                    if let Some(dialog) = model.edit.as_mut() {
                        dialog.draft = text;
                    }
                }

                Event::EditSubmitted => Self::on_edit_submitted(model, caps),

                Event::EditCancelled => {
                    model.edit = None;
                }

                Event::DeleteConfirmed => Self::on_delete_confirmed(model, caps),

                Event::DeleteCancelled => {
                    model.pending_delete = None;
                }

                Event::ToastDismissed => {
                    model.toast = None;
                    model.last_error = None;
                }

                Event::LikeToggled { key, result } => {
                    model.in_flight.finish(&key, PostAction::ToggleLike);
                    if let Some(state) = model.cards.get_mut(&key) {
                        state.like_loading = false;
                    }
                    match result {
                        Ok(reply) => {
                            let state = model.cards.entry(key.clone()).or_default();
                            state.liked = reply.liked;
                            state.likes = reply.likes;
                            info!(post = %key, liked = reply.liked, likes = reply.likes, "reaction updated");
                        }
                        Err(e) => {
                            Self::fail(model, &key, PostAction::ToggleLike, e, TOAST_LIKE_FAILED);
                        }
                    }
                }

                Event::CommentsLoaded { key, result } => {
                    model.in_flight.finish(&key, PostAction::LoadComments);
                    match result {
                        Ok(reply) => {
                            let count = reply.count();
                            model.cards.entry(key.clone()).or_default().comment_count = count;
                            model.comments = Some(CommentsDialog {
                                post: key,
                                summary: reply.post,
                                comments: reply.comments,
                                count,
                                draft: String::new(),
                            });
                        }
                        Err(e) => {
                            Self::fail(model, &key, PostAction::LoadComments, e, TOAST_COMMENTS_FAILED);
                        }
                    }
                }

                Event::CommentAdded { key, result } => {
                    model.in_flight.finish(&key, PostAction::AddComment);
                    match result {
                        Ok(reply) => {
                            let previous = match model.comments.as_ref() {
                                Some(dialog) if dialog.post == key => dialog.count,
                                _ => model.cards.get(&key).map_or(0, |s| s.comment_count),
                            };
                            let count = reply.count_after(previous);
                            model.cards.entry(key.clone()).or_default().comment_count = count;

                            if let Some(dialog) = model.comments.as_mut().filter(|d| d.post == key) {
                                dialog.count = count;
                                dialog.draft.clear();
                                Self::refresh_comments(model, caps, &key);
                            }
                            info!(post = %key, count, "comment posted");
                            model.show_toast(ToastMessage::success(TOAST_COMMENT_POSTED));
                        }
                        Err(e) => {
                            Self::fail(model, &key, PostAction::AddComment, e, TOAST_COMMENT_FAILED);
                        }
                    }
                }

                Event::CommentsRefreshed { key, result } => {
                    match (model.comments.as_mut().filter(|d| d.post == key), result) {
                        (Some(dialog), Ok(reply)) => dialog.comments = reply.comments,
                        (Some(_), Err(e)) => {
                            warn!(post = %key, error = %e, "comment refresh failed");
                        }
                        (None, _) => debug!(post = %key, "dropping stale comment refresh"),
                    }
                }

                Event::PostEdited { key, result } => {
                    model.in_flight.finish(&key, PostAction::Edit);
                    match result {
                        Ok(reply) => {
                            let submitted = match model.edit.as_ref() {
                                Some(dialog) if dialog.post == key => {
                                    model.edit.take().map(|d| d.draft.trim().to_string())
                                }
                                _ => None,
                            };
                            let state = model.cards.entry(key.clone()).or_default();
                            state.replacement_html = reply.post_html;
                            if let Some(message) = submitted {
                                state.message = message;
                            }
                            info!(post = %key, "post updated");
                            model.show_toast(ToastMessage::success(TOAST_POST_UPDATED));
                        }
                        Err(e) => {
                            Self::fail(model, &key, PostAction::Edit, e, TOAST_UPDATE_FAILED);
                        }
                    }
                }

                Event::PostDeleted { key, result } => {
                    model.in_flight.finish(&key, PostAction::Delete);
                    match result {
                        Ok(_) => {
                            model.cards.entry(key.clone()).or_default().deleted = true;
                            if model.comments_open_for(&key) {
                                model.comments = None;
                            }
                            if model.edit.as_ref().is_some_and(|d| d.post == key) {
                                model.edit = None;
                            }
                            if model.open_menu.as_ref() == Some(&key) {
                                model.open_menu = None;
                            }
                            info!(post = %key, "post deleted");
                            model.show_toast(ToastMessage::success(TOAST_POST_DELETED));
                        }
                        Err(e) => {
                            Self::fail(model, &key, PostAction::Delete, e, TOAST_DELETE_FAILED);
                        }
                    }
                }
            }

            caps.render.render();
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel {
                initialized: model.initialized,
                cascades: model
                    .cascades
                    .iter()
                    .map(|(form_id, cascade)| CascadeView {
                        form_id: form_id.clone(),
                        widgets: cascade.widgets().to_vec(),
                        selection: cascade.selection(),
                    })
                    .collect(),
                cards: model
                    .cards
                    .iter()
                    .map(|(key, state)| Self::card_view(key, state, model.open_menu.as_ref()))
                    .collect(),
                open_menu: model.open_menu.clone(),
                comments: model
                    .comments
                    .as_ref()
                    .map(|dialog| Self::comments_view(model, dialog)),
                viewer: model.viewer.as_ref().map(|viewer| MediaViewerView {
                    url: viewer.current().to_string(),
                    kind: viewer.current_kind(),
                    counter: viewer.counter(),
                }),
                edit: model.edit.as_ref().map(|dialog| EditView {
                    post: dialog.post.clone(),
                    draft: dialog.draft.clone(),
                    can_submit: !dialog.draft.trim().is_empty(),
                    is_saving: model.in_flight.contains(&dialog.post, PostAction::Edit),
                }),
                delete_prompt: model.pending_delete.as_ref().map(|post| DeletePromptView {
                    post: post.clone(),
                    message: DELETE_CONFIRMATION.into(),
                }),
                toast: model.toast.as_ref().map(ToastView::from),
                error: model.last_error.as_ref().map(UserFacingError::from),
            }
        }
    }
}
