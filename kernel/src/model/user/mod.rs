use crate::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeOwner {
    pub owner_id: UserId,
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingUser {
    pub user_id: UserId,
    pub user_name: String,
}
