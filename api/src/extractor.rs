use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::{id::UserId, user::User};
use registry::AppRegistry;
use shared::error::AppError;

/// The acting user, resolved from an `Authorization: Bearer <token>` header.
pub struct AuthorizedUser {
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let access_token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::UnauthenticatedError)?;

        let user = registry
            .auth_repository()
            .find_user_by_token(access_token)
            .await?
            .ok_or_else(|| {
                tracing::debug!("rejected unknown or expired access token");
                AppError::UnauthenticatedError
            })?;

        Ok(Self { user })
    }
}
