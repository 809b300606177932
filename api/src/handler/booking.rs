use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use kernel::model::{
    booking::event::CancelBooking,
    id::{BookingId, OfficeId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingResponse, BookingsResponse, CreateBookingRequest},
};

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    req: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let Json(req) = req?;
    let event = req.into_event(user.id())?;

    registry
        .booking_repository()
        .create(event)
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    path: Result<Path<BookingId>, PathRejection>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    // no booking can live under an id that does not parse
    let Path(booking_id) = path.map_err(|_| AppError::EntityNotFound("booking not found".into()))?;

    registry
        .booking_repository()
        .cancel(CancelBooking::new(booking_id, user.id()))
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_office_bookings(
    path: Result<Path<OfficeId>, PathRejection>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let Path(office_id) = path?;

    registry
        .booking_repository()
        .find_live_by_office_id(office_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}
