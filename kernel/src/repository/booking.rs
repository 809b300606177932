use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        Booking, DateRange,
    },
    id::{OfficeId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Checks and inserts atomically with respect to other bookings of the
    /// same office. Fails with `EntityNotFound` for an unknown office and
    /// `Conflict` when a live booking overlaps the requested period.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    /// Cancels a booking owned by the requesting user. Bookings of other
    /// users are reported as not found.
    async fn cancel(&self, event: CancelBooking) -> AppResult<Booking>;
    async fn is_available(&self, office_id: OfficeId, period: DateRange) -> AppResult<bool>;
    /// Live bookings of an office ordered by start date.
    async fn find_live_by_office_id(&self, office_id: OfficeId) -> AppResult<Vec<Booking>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
}
