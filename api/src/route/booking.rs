use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{create_booking, show_current_booking, update_booking};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", get(show_current_booking))
        .route("/", post(create_booking))
        .route("/:booking_id", put(update_booking));

    Router::new().nest("/booking", booking_routers)
}
