use axum::{routing::post, Router};

use crate::modules::chat::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/chat", post(controller::chat))
}
