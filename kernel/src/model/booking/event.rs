use derive_new::new;

use super::period::DateRange;
use crate::model::id::{BookingId, OfficeId, UserId};

#[derive(new, Debug)]
pub struct CreateBooking {
    pub office_id: OfficeId,
    pub requested_by: UserId,
    pub period: DateRange,
}

#[derive(new, Debug)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_by: UserId,
}
