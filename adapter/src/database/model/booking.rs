use kernel::model::{
    booking::{admission::BookableOffice, Booking, BookingStatus, DateRange},
    id::{BookingId, OfficeId, UserId},
    user::BookingUser,
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

// bookings joined with users for the display name of the booker
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub office_id: OfficeId,
    pub user_id: UserId,
    pub user_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            office_id,
            user_id,
            user_name,
            start_date,
            end_date,
            total_price,
            status,
            created_at,
        } = value;
        let status = BookingStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "booking {booking_id} has unknown status {status:?}"
            ))
        })?;
        let period = DateRange::new(start_date, end_date).map_err(|_| {
            AppError::ConversionEntityError(format!("booking {booking_id} has reversed dates"))
        })?;
        Ok(Booking {
            booking_id,
            office_id,
            booked_by: BookingUser { user_id, user_name },
            period,
            total_price,
            status,
            created_at,
        })
    }
}

// only the dates of a live booking, used for the overlap check
#[derive(sqlx::FromRow)]
pub struct BookedPeriodRow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TryFrom<BookedPeriodRow> for DateRange {
    type Error = AppError;

    fn try_from(value: BookedPeriodRow) -> Result<Self, Self::Error> {
        DateRange::new(value.start_date, value.end_date).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "stored booking period {}..{} is reversed",
                value.start_date, value.end_date
            ))
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct BookableOfficeRow {
    pub office_id: OfficeId,
    pub monthly_price: Decimal,
    pub is_available: bool,
}

impl From<BookableOfficeRow> for BookableOffice {
    fn from(value: BookableOfficeRow) -> Self {
        let BookableOfficeRow {
            office_id,
            monthly_price,
            is_available,
        } = value;
        BookableOffice {
            office_id,
            monthly_price,
            is_available,
        }
    }
}
