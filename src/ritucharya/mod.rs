mod dto;
pub mod handlers;
pub mod services;
pub mod weather;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
