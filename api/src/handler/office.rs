use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use garde::Validate;
use kernel::model::id::OfficeId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{AvailabilityQuery, AvailabilityResponse},
    office::{OfficeListQuery, OfficeResponse, PaginatedOfficeResponse},
};

pub async fn show_office_list(
    State(registry): State<AppRegistry>,
    query: Result<Query<OfficeListQuery>, QueryRejection>,
) -> AppResult<Json<PaginatedOfficeResponse>> {
    let Query(query) = query?;
    query.validate(&())?;

    registry
        .office_repository()
        .find_all(query.into())
        .await
        .map(PaginatedOfficeResponse::from)
        .map(Json)
}

pub async fn show_office(
    path: Result<Path<OfficeId>, PathRejection>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OfficeResponse>> {
    let Path(office_id) = path?;

    registry
        .office_repository()
        .find_by_id(office_id)
        .await
        .and_then(|office| match office {
            Some(office) => Ok(Json(office.into())),
            None => Err(AppError::EntityNotFound(format!(
                "office {office_id} not found"
            ))),
        })
}

pub async fn show_office_availability(
    path: Result<Path<OfficeId>, PathRejection>,
    State(registry): State<AppRegistry>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> AppResult<Json<AvailabilityResponse>> {
    let Path(office_id) = path?;
    let Query(query) = query?;
    let period = query.period()?;

    let available = registry
        .booking_repository()
        .is_available(office_id, period)
        .await?;

    Ok(Json(AvailabilityResponse {
        office_id,
        start_date: period.start(),
        end_date: period.end(),
        available,
    }))
}
