use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::user::get_current_user;

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/me", get(get_current_user));

    Router::new().nest("/users", routers)
}
