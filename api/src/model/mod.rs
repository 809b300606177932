pub mod booking;
pub mod office;
pub mod user;
