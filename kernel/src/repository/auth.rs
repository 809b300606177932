use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::user::User;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Resolves a bearer token to its user. Unknown and expired tokens
    /// both yield `None`.
    async fn find_user_by_token(&self, access_token: &str) -> AppResult<Option<User>>;
}
