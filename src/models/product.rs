use axum::body::Bytes;
use serde::Deserialize;
use sqlx::FromRow;

use crate::error::ValidationError;

// 1. A stored product row, with the name of its category resolved by join
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub content: Option<String>,
    pub shop: Option<String>,
    pub price: i64,
    pub image_filename: Option<String>,
    pub category_id: Option<i64>,
    // Read-only, never written
    pub category_name: Option<String>,
}

// 2. Typed fields ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub content: Option<String>,
    pub shop: Option<String>,
    pub price: i64,
    pub category_id: Option<i64>,
}

/// A file part taken from the upload form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Bytes,
}

// 3. Raw multipart fields, exactly as submitted
#[derive(Debug, Default)]
pub struct UploadProductForm {
    pub content: Option<String>,
    pub shop: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

impl UploadProductForm {
    /// Coerces the text fields into a `NewProduct`. Nothing is touched on failure.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::new("price", "price is required")),
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ValidationError::new("price", format!("price must be a whole number, got {raw:?}"))
            })?,
        };

        let category_id = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                ValidationError::new("category", format!("unknown category {raw:?}"))
            })?),
        };

        Ok(NewProduct {
            content: self.content.clone(),
            shop: self.shop.clone(),
            price,
            category_id,
        })
    }
}
