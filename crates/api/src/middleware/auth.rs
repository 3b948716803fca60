//! JWT + session authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use eventstay_core::error::CoreError;
use eventstay_core::types::DbId;
use eventstay_db::repositories::SessionRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// The token must both validate as an HS256 JWT and match an active row in
/// the `sessions` table; a syntactically valid token whose session was
/// deleted is rejected. Use this as an extractor parameter in any handler
/// that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

/// Message returned for every authentication failure, matching the public
/// API contract.
const SIGN_IN_MSG: &str = "You must be signed in to continue";

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(SIGN_IN_MSG.into())))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(SIGN_IN_MSG.into())))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| AppError::Core(CoreError::Unauthorized(SIGN_IN_MSG.into())))?;

        // The token must still be backed by a session row; tokens of
        // signed-out sessions fail here even before their JWT expiry.
        SessionRepo::find_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(SIGN_IN_MSG.into())))?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
