use super::{
    booking::build_booking_routers, health::build_health_check_routers,
    office::build_office_routers, user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_office_routers())
        .merge(build_booking_routers())
        .merge(build_user_routers());
    Router::new().nest("/api/v1", router)
}
