use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{
    id::{BookingId, OfficeId},
    user::BookingUser,
};

pub mod admission;
pub mod event;
pub mod period;
pub mod pricing;

pub use period::DateRange;

/// Lifecycle of a booking. New bookings start as `Pending`; the only
/// transition is from a live status to `Cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[derive(EnumString, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Live bookings hold their dates against other requests.
    pub fn is_live(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub office_id: OfficeId,
    pub booked_by: BookingUser,
    pub period: DateRange,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Moves a live booking to `Cancelled`. Returns false when it already was.
    pub fn cancel(&mut self) -> bool {
        if !self.status.is_live() {
            return false;
        }
        self.status = BookingStatus::Cancelled;
        true
    }
}
