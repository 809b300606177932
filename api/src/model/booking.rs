use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus, DateRange},
    id::{BookingId, OfficeId, UserId},
    user::BookingUser,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub office_id: OfficeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateBookingRequest {
    /// Date ordering is checked here, before the request reaches the store.
    pub fn into_event(self, requested_by: UserId) -> AppResult<CreateBooking> {
        let period = DateRange::new(self.start_date, self.end_date)?;
        Ok(CreateBooking::new(self.office_id, requested_by, period))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AvailabilityQuery {
    pub fn period(&self) -> AppResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub office_id: OfficeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub office_id: OfficeId,
    pub booked_by: BookingUserResponse,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_count: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            office_id,
            booked_by,
            period,
            total_price,
            status,
            created_at,
        } = value;
        Self {
            booking_id,
            office_id,
            booked_by: booked_by.into(),
            start_date: period.start(),
            end_date: period.end(),
            day_count: period.day_count(),
            total_price,
            status,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUserResponse {
    pub user_id: UserId,
    pub user_name: String,
}

impl From<BookingUser> for BookingUserResponse {
    fn from(value: BookingUser) -> Self {
        let BookingUser { user_id, user_name } = value;
        Self { user_id, user_name }
    }
}
