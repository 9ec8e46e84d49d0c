//! REST endpoints and payloads for post interactions.
//!
//! Every endpoint lives under the category's base path:
//! `{base}/api/post/{category}/{id}/{action}/`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PostKey;
use crate::capabilities::HttpMethod;
use crate::{AppError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    ToggleLike,
    Comments,
    AddComment,
    Edit,
    Delete,
}

impl Endpoint {
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::ToggleLike | Self::AddComment => HttpMethod::Post,
            Self::Comments => HttpMethod::Get,
            Self::Edit => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    const fn segment(self) -> &'static str {
        match self {
            Self::ToggleLike => "toggle-like",
            Self::Comments | Self::AddComment => "comments",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub fn path(self, key: &PostKey) -> String {
        format!(
            "{}/api/post/{}/{}/{}/",
            key.category.api_base(),
            key.category,
            key.id,
            self.segment()
        )
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Http(String),

    #[error("server responded with status {0}")]
    Status(u16),

    /// A non-2xx reply whose body still explained the failure.
    #[error("server responded with status {status}: {error}")]
    Refused { status: u16, error: String },

    #[error("response body could not be decoded: {0}")]
    Decode(String),

    #[error("response had no body")]
    MissingBody,

    #[error("request rejected: {0}")]
    Rejected(String),
}

impl From<crux_http::Error> for ApiError {
    fn from(e: crux_http::Error) -> Self {
        match e {
            crux_http::Error::Http(http) => {
                let status = u16::from(http.code);
                match http.body.as_deref().and_then(server_error) {
                    Some(error) => Self::Refused { status, error },
                    None => Self::Status(status),
                }
            }
            crux_http::Error::Json(message) => Self::Decode(message),
            other => Self::Http(other.to_string()),
        }
    }
}

/// The `error` text of a `{success: false, error}` body, if it has one.
fn server_error(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct Failure {
        #[serde(default)]
        success: bool,
        error: Option<String>,
    }

    let failure: Failure = serde_json::from_slice(body).ok()?;
    if failure.success {
        return None;
    }
    failure.error.filter(|e| !e.trim().is_empty())
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        let kind = match &e {
            ApiError::Http(_) => ErrorKind::Network,
            ApiError::Status(status) | ApiError::Refused { status, .. } => {
                ErrorKind::from_status(*status)
            }
            ApiError::Decode(_) | ApiError::MissingBody => ErrorKind::Deserialization,
            ApiError::Rejected(_) => ErrorKind::Rejected,
        };
        match e {
            ApiError::Refused { status, error } => AppError::new(kind, error)
                .with_internal(format!("server responded with status {status}")),
            ApiError::Rejected(error) => AppError::new(kind, error),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

/// Shape shared by every JSON reply: a `success` flag and an optional
/// `error` string.
pub trait ApiReply {
    fn success(&self) -> bool;

    fn error(&self) -> Option<&str>;

    /// Extra conditions a successful reply must meet.
    fn is_complete(&self) -> bool {
        true
    }
}

/// Turns an HTTP outcome into a reply the UI may act on. Anything short of
/// a 2xx response carrying `success: true` is an error.
pub fn confirmed<T: ApiReply>(
    result: crux_http::Result<crux_http::Response<T>>,
) -> Result<T, ApiError> {
    let mut response = result?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(u16::from(status)));
    }

    let reply = response.take_body().ok_or(ApiError::MissingBody)?;
    if reply.success() && reply.is_complete() {
        Ok(reply)
    } else {
        Err(ApiError::Rejected(
            reply.error().unwrap_or("request was not successful").to_string(),
        ))
    }
}

macro_rules! api_reply {
    ($name:ident) => {
        impl ApiReply for $name {
            fn success(&self) -> bool {
                self.success
            }

            fn error(&self) -> Option<&str> {
                self.error.as_deref()
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleLikeResponse {
    pub success: bool,
    pub liked: bool,
    pub likes: u32,
    pub error: Option<String>,
}

api_reply!(ToggleLikeResponse);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSummary {
    pub author_name: Option<String>,
    pub author_profile_picture: Option<String>,
    /// Object, JSON-encoded string or plain text; see [`super::format_location`].
    pub location: Option<serde_json::Value>,
    pub timestamp: Option<String>,
    pub message: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: serde_json::Value,
    pub author: Option<String>,
    pub author_profile_picture: Option<String>,
    pub text: String,
    pub timestamp: Option<String>,
    pub liked: bool,
    pub likes: u32,
    pub is_author: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsResponse {
    pub success: bool,
    pub post: PostSummary,
    pub comments: Vec<Comment>,
    pub comment_count: Option<u32>,
    pub error: Option<String>,
}

api_reply!(CommentsResponse);

impl CommentsResponse {
    /// The server count when it reports a non-zero one, else the list length.
    #[must_use]
    pub fn count(&self) -> u32 {
        match self.comment_count {
            Some(n) if n > 0 => n,
            _ => u32::try_from(self.comments.len()).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddCommentResponse {
    pub success: bool,
    pub comment_count: Option<u32>,
    pub error: Option<String>,
}

api_reply!(AddCommentResponse);

impl AddCommentResponse {
    #[must_use]
    pub fn count_after(&self, previous: u32) -> u32 {
        match self.comment_count {
            Some(n) if n > 0 => n,
            _ => previous.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPost {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditPostResponse {
    pub success: bool,
    pub post_html: Option<String>,
    pub error: Option<String>,
}

impl ApiReply for EditPostResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn is_complete(&self) -> bool {
        self.post_html.as_deref().is_some_and(|html| !html.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePostResponse {
    pub success: bool,
    pub error: Option<String>,
}

api_reply!(DeletePostResponse);
