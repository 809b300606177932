use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use super::{period::DateRange, pricing::compute_price};
use crate::model::id::OfficeId;

/// The parts of an office that decide whether and for how much it can be
/// booked.
#[derive(Debug, Clone, Copy)]
pub struct BookableOffice {
    pub office_id: OfficeId,
    pub monthly_price: Decimal,
    pub is_available: bool,
}

impl BookableOffice {
    /// Whether `admit` would accept `requested` right now.
    pub fn accepts(&self, live_periods: &[DateRange], requested: &DateRange) -> bool {
        self.is_available && is_available(live_periods, requested)
    }
}

/// True when none of the office's live periods overlaps `requested`.
pub fn is_available<'a, I>(live_periods: I, requested: &DateRange) -> bool
where
    I: IntoIterator<Item = &'a DateRange>,
{
    live_periods
        .into_iter()
        .all(|existing| !existing.overlaps(requested))
}

/// Decides a booking request against the office's current live periods and
/// returns the price to charge. Callers must hold the office's booking lock
/// for as long as the returned price is used to insert a booking.
pub fn admit(
    office: &BookableOffice,
    live_periods: &[DateRange],
    requested: &DateRange,
) -> AppResult<Decimal> {
    if !office.is_available {
        return Err(AppError::UnprocessableEntity(format!(
            "office {} is not open for bookings",
            office.office_id
        )));
    }

    if !is_available(live_periods, requested) {
        return Err(AppError::Conflict(format!(
            "office {} is already booked between {} and {}",
            office.office_id,
            requested.start(),
            requested.end()
        )));
    }

    Ok(compute_price(office.monthly_price, requested))
}
