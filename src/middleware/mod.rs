pub mod auth;

pub use auth::{CurrentUser, SESSION_COOKIE, clear_session_cookie, session_cookie};
