use rust_decimal::{Decimal, RoundingStrategy};

use super::period::DateRange;

/// Monthly prices are turned into a daily rate with a flat 30-day month.
pub const DAYS_PER_MONTH: u32 = 30;

/// Total price of a booking: the daily rate times the inclusive day count,
/// rounded half-up to cents.
pub fn compute_price(monthly_price: Decimal, period: &DateRange) -> Decimal {
    let daily_rate = monthly_price / Decimal::from(DAYS_PER_MONTH);
    let mut total = (daily_rate * Decimal::from(period.day_count()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(2);
    total
}
