use async_trait::async_trait;
use derive_new::new;
use kernel::{model::user::User, repository::auth::AuthRepository};
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn find_user_by_token(&self, access_token: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT
                u.user_id,
                u.user_name,
                u.email,
                u.company_name
                FROM access_tokens AS t
                INNER JOIN users AS u ON t.user_id = u.user_id
                WHERE t.access_token = $1
                  AND t.expires_at > CURRENT_TIMESTAMP
            "#,
        )
        .bind(access_token)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }
}
