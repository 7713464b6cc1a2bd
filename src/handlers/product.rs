use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    db::{categories, products},
    error::AppResult,
    models::product::{ImageUpload, SearchParams, UploadProductForm},
    state::AppState,
    views::{render, IndexTemplate, SearchTemplate, UploadTemplate},
};

// GET /
pub async fn index_handler(State(state): State<AppState>) -> AppResult<Response> {
    let products = products::list_products(&state.pool).await?;
    let categories = categories::list_categories(&state.pool).await?;

    render(StatusCode::OK, &IndexTemplate { products, categories })
}

// GET /search?keyword=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let products = products::find_products_by_keyword(&state.pool, &params.keyword).await?;

    render(
        StatusCode::OK,
        &SearchTemplate {
            products,
            keyword: params.keyword,
        },
    )
}

// GET /upload
pub async fn upload_form_handler(State(state): State<AppState>) -> AppResult<Response> {
    let categories = categories::list_categories(&state.pool).await?;

    render(StatusCode::OK, &UploadTemplate { categories, error: None })
}

// POST /upload (multipart)
pub async fn upload_product_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    // 1. Read every field of the form
    let form = read_upload_form(multipart).await?;

    // 2. Coerce before touching disk or database
    let new_product = match form.validate() {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!("Rejected product upload: {}", e);
            let categories = categories::list_categories(&state.pool).await?;
            return render(
                StatusCode::UNPROCESSABLE_ENTITY,
                &UploadTemplate {
                    categories,
                    error: Some(e.message),
                },
            );
        }
    };

    // 3. Save the image (if any), then the row
    let image_filename = state.uploads.save_image(form.image).await?;
    let product =
        products::create_product(&state.pool, &new_product, image_filename.as_deref()).await?;

    tracing::info!("Created product {} (image: {:?})", product.id, product.image_filename);
    Ok(Redirect::to("/").into_response())
}

async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadProductForm> {
    let mut form = UploadProductForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "content" => form.content = Some(field.text().await?),
            "shop" => form.shop = Some(field.text().await?),
            "price" => form.price = Some(field.text().await?),
            "category" => form.category = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;

                // Browsers send an empty part when no file was chosen
                if !file_name.is_empty() {
                    form.image = Some(ImageUpload { file_name, data });
                }
            }
            other => tracing::debug!("Ignoring unknown form field {:?}", other),
        }
    }

    Ok(form)
}
