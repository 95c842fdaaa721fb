use axum::{routing::post, Router};

use crate::modules::listing::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/suggest", post(controller::suggest))
}
