pub mod booking;
pub mod id;
pub mod list;
pub mod office;
pub mod user;
