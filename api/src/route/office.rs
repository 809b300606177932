use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::office::{show_office, show_office_availability, show_office_list};

pub fn build_office_routers() -> Router<AppRegistry> {
    let offices_routers = Router::new()
        .route("/", get(show_office_list))
        .route("/:office_id", get(show_office))
        .route("/:office_id/availability", get(show_office_availability));

    Router::new().nest("/offices", offices_routers)
}
