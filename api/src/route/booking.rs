use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    cancel_booking, create_booking, show_my_bookings, show_office_bookings,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(create_booking))
        .route("/", get(show_my_bookings))
        .route("/:booking_id", delete(cancel_booking))
        .route("/office/:office_id", get(show_office_bookings));

    Router::new().nest("/bookings", bookings_routers)
}
