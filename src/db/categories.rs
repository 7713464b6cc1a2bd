use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::category::Category,
};

pub async fn list_categories(pool: &DbPool) -> AppResult<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Fails with `DuplicateKey` when a category with this exact name exists.
pub async fn create_category(pool: &DbPool, name: &str) -> AppResult<Category> {
    sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::from_insert(e, || format!("category {name:?} already exists")))
}
