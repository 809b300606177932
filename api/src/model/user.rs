use kernel::model::{id::UserId, user::User};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub company_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            company_name,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            company_name,
        }
    }
}
