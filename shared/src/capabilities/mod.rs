mod http;

pub use self::http::{
    validate_header_name, ApiOrigin, ConfigError, CsrfToken, HttpMethod, CSRF_COOKIE, CSRF_HEADER,
    MAX_HEADER_NAME_LENGTH, MAX_HEADER_VALUE_LENGTH, MAX_URL_LENGTH,
};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

// The derive reads the event type from each field's generic argument, so
// the fields name `Event` directly instead of going through an alias.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
