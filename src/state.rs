use axum::extract::FromRef;

use crate::{db::DbPool, utils::upload_dir::UploadDir};

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: DbPool,
    pub uploads: UploadDir,
}
