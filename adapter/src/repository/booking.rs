use crate::database::{
    model::booking::{BookableOfficeRow, BookedPeriodRow, BookingRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        admission::{self, BookableOffice},
        event::{CancelBooking, CreateBooking},
        Booking, BookingStatus, DateRange,
    },
    id::{BookingId, OfficeId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

type PgTransaction<'a> = sqlx::Transaction<'a, sqlx::Postgres>;

// SQLSTATE codes raised when a competing transaction wins the race
const SERIALIZATION_FAILURE: &str = "40001";
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // The row lock on the office is the per-office booking token: a second
        // request for the same office waits here until the first one is done.
        let office: BookableOffice = sqlx::query_as::<_, BookableOfficeRow>(
            r#"
                SELECT office_id, monthly_price, is_available
                FROM offices
                WHERE office_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.office_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(race_as_conflict)?
        .map(BookableOffice::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("office {} not found", event.office_id))
        })?;

        let live_periods = self.find_live_periods(&mut tx, event.office_id).await?;
        let total_price = admission::admit(&office, &live_periods, &event.period)
            .inspect_err(|e| {
                if let AppError::Conflict(_) = e {
                    tracing::warn!(
                        office_id = %event.office_id,
                        start_date = %event.period.start(),
                        end_date = %event.period.end(),
                        "booking request overlaps a live booking"
                    );
                }
            })?;

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, office_id, user_id, start_date, end_date, total_price, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(booking_id)
        .bind(event.office_id)
        .bind(event.requested_by)
        .bind(event.period.start())
        .bind(event.period.end())
        .bind(total_price)
        .bind(BookingStatus::default().to_string())
        .execute(&mut *tx)
        .await
        .map_err(race_as_conflict)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        let booking = self.find_by_id_in(&mut tx, booking_id).await?;

        tx.commit().await.map_err(|e| match race_as_conflict(e) {
            AppError::SpecificOperationError(e) => AppError::TransactionError(e),
            other => other,
        })?;

        tracing::info!(
            booking_id = %booking.booking_id,
            office_id = %booking.office_id,
            total_price = %booking.total_price,
            "booking created"
        );

        Ok(booking)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<Booking> {
        // The booking row lock serialises cancels of the same booking; the
        // later one reads the cancelled status. A booking of somebody else is
        // indistinguishable from a missing one.
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.office_id,
                b.user_id,
                u.user_name,
                b.start_date,
                b.end_date,
                b.total_price,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                WHERE b.booking_id = $1 AND b.user_id = $2
                FOR UPDATE OF b
            "#,
        )
        .bind(event.booking_id)
        .bind(event.requested_by)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        };

        let mut booking = Booking::try_from(row)?;
        if !booking.cancel() {
            return Ok(booking);
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE booking_id = $1
            "#,
        )
        .bind(booking.booking_id)
        .bind(booking.status.to_string())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been cancelled".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(booking_id = %booking.booking_id, "booking cancelled");

        Ok(booking)
    }

    async fn is_available(&self, office_id: OfficeId, period: DateRange) -> AppResult<bool> {
        let mut tx = self.db.begin().await?;

        let office: BookableOffice = sqlx::query_as::<_, BookableOfficeRow>(
            r#"
                SELECT office_id, monthly_price, is_available
                FROM offices
                WHERE office_id = $1
            "#,
        )
        .bind(office_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(BookableOffice::from)
        .ok_or_else(|| AppError::EntityNotFound(format!("office {office_id} not found")))?;

        let live_periods = self.find_live_periods(&mut tx, office_id).await?;
        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(office.accepts(&live_periods, &period))
    }

    async fn find_live_by_office_id(&self, office_id: OfficeId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.office_id,
                b.user_id,
                u.user_name,
                b.start_date,
                b.end_date,
                b.total_price,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                WHERE b.office_id = $1 AND b.status <> 'cancelled'
                ORDER BY b.start_date ASC
            "#,
        )
        .bind(office_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Booking::try_from)
        .collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.office_id,
                b.user_id,
                u.user_name,
                b.start_date,
                b.end_date,
                b.total_price,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                WHERE b.user_id = $1
                ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Booking::try_from)
        .collect()
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(&self, tx: &mut PgTransaction<'_>) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn find_live_periods(
        &self,
        tx: &mut PgTransaction<'_>,
        office_id: OfficeId,
    ) -> AppResult<Vec<DateRange>> {
        sqlx::query_as::<_, BookedPeriodRow>(
            r#"
                SELECT start_date, end_date
                FROM bookings
                WHERE office_id = $1 AND status <> 'cancelled'
            "#,
        )
        .bind(office_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(race_as_conflict)?
        .into_iter()
        .map(DateRange::try_from)
        .collect()
    }

    async fn find_by_id_in(
        &self,
        tx: &mut PgTransaction<'_>,
        booking_id: BookingId,
    ) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.office_id,
                b.user_id,
                u.user_name,
                b.start_date,
                b.end_date,
                b.total_price,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                WHERE b.booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        Booking::try_from(row)
    }
}

/// Losing a race against a concurrent booking of the same office surfaces
/// either as a serialization failure or as the exclusion constraint firing.
fn race_as_conflict(e: sqlx::Error) -> AppError {
    let code = e
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());
    match code.as_deref() {
        Some(SERIALIZATION_FAILURE) | Some(EXCLUSION_VIOLATION) => AppError::Conflict(
            "the office was booked concurrently for overlapping dates".into(),
        ),
        _ => AppError::SpecificOperationError(e),
    }
}
