pub mod booking;
pub mod health;
pub mod office;
pub mod user;
pub mod v1;
