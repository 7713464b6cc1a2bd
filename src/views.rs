use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::{category::Category, product::Product},
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub products: Vec<Product>,
    pub keyword: String,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadTemplate {
    pub categories: Vec<Category>,
    pub error: Option<String>,
}

/// Renders `template` as an HTML response with the given status.
pub fn render<T: Template>(status: StatusCode, template: &T) -> AppResult<Response> {
    let body = template.render()?;
    Ok((status, Html(body)).into_response())
}
