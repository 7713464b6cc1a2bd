use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    db::{categories, DbPool},
    error::{AppError, AppResult},
    models::category::AddCategoryForm,
    views::{render, UploadTemplate},
};

// POST /add_category
pub async fn add_category_handler(
    State(pool): State<DbPool>,
    Form(form): Form<AddCategoryForm>,
) -> AppResult<Response> {
    // An empty name is ignored, same as no name
    let name = match form.category_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(Redirect::to("/upload").into_response()),
    };

    match categories::create_category(&pool, name).await {
        Ok(category) => {
            tracing::info!("Created category {} ({:?})", category.id, category.name);
            Ok(Redirect::to("/upload").into_response())
        }
        Err(AppError::DuplicateKey(message)) => {
            tracing::warn!("Rejected category: {}", message);
            let categories = categories::list_categories(&pool).await?;
            render(
                StatusCode::CONFLICT,
                &UploadTemplate {
                    categories,
                    error: Some(message),
                },
            )
        }
        Err(e) => Err(e),
    }
}
