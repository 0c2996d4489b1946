use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use time::Duration;

use crate::db::models::User;
use crate::error::AppError;
use crate::router::AppState;

pub const SESSION_COOKIE: &str = "cognicare_session";

const SESSION_MAX_AGE_DAYS: i64 = 7;

/// The authenticated user bound to the request's session cookie.
///
/// Runs before the handler body on every protected route, so an anonymous
/// caller is rejected with 401 before any domain-store access happens on
/// their behalf.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        let user_id = jar
            .get(SESSION_COOKIE)
            .and_then(|c| c.value().parse::<i64>().ok())
            .ok_or(AppError::Unauthorized)?;

        // A session pointing at a vanished account is treated the same as
        // no session at all.
        let user = state
            .store
            .get_user_by_id(user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(Self(user))
    }
}

/// Session cookie bound to a freshly authenticated identity.
pub fn session_cookie(user_id: i64) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// Removal cookie for logout; safe to apply repeatedly.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
