use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// What the add-category form sends
#[derive(Debug, Deserialize)]
pub struct AddCategoryForm {
    pub category_name: Option<String>,
}
