use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{category, product},
    state::AppState,
};

pub fn create_routes(state: AppState, max_upload_bytes: usize) -> Router {
    // Saved images, served back by file name
    let images = ServeDir::new(state.uploads.path());

    Router::new()
        .route("/", get(product::index_handler))
        .route("/search", get(product::search_handler))
        .route(
            "/upload",
            get(product::upload_form_handler).post(product::upload_product_handler),
        )
        .route("/add_category", post(category::add_category_handler))
        .nest_service("/uploads", images)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
