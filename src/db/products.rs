use crate::{
    db::DbPool,
    error::AppResult,
    models::product::{NewProduct, Product},
};

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.content, p.shop, p.price, p.image_filename, p.category_id,
           c.name AS category_name
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

pub async fn list_products(pool: &DbPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} ORDER BY p.id ASC"))
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn get_product(pool: &DbPool, id: i64) -> AppResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Case-sensitive substring match on `content`. `%` and `_` match themselves.
/// An empty keyword matches every product, including ones without content.
pub async fn find_products_by_keyword(pool: &DbPool, keyword: &str) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "{SELECT_PRODUCT} WHERE ?1 = '' OR instr(p.content, ?1) > 0 ORDER BY p.id ASC"
    ))
    .bind(keyword)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn create_product(
    pool: &DbPool,
    product: &NewProduct,
    image_filename: Option<&str>,
) -> AppResult<Product> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO products (content, shop, price, image_filename, category_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(product.content.as_deref())
    .bind(product.shop.as_deref())
    .bind(product.price)
    .bind(image_filename)
    .bind(product.category_id)
    .fetch_one(pool)
    .await?;

    // Re-read so the category name comes back with the row
    let created = get_product(pool, id).await?;
    created.ok_or_else(|| sqlx::Error::RowNotFound.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{categories::create_category, init_in_memory};

    fn new_product(content: Option<&str>, price: i64, category_id: Option<i64>) -> NewProduct {
        NewProduct {
            content: content.map(str::to_string),
            shop: Some("Market".to_string()),
            price,
            category_id,
        }
    }

    #[tokio::test]
    async fn created_product_carries_its_category() {
        let pool = init_in_memory().await.unwrap();
        let fruit = create_category(&pool, "Fruit").await.unwrap();

        let apple = create_product(&pool, &new_product(Some("Apple"), 50, Some(fruit.id)), None)
            .await
            .unwrap();

        assert_eq!(apple.price, 50);
        assert_eq!(apple.category_id, Some(fruit.id));
        assert_eq!(apple.category_name.as_deref(), Some("Fruit"));
        assert_eq!(apple.image_filename, None);
        assert_eq!(list_products(&pool).await.unwrap(), vec![apple]);
    }

    #[tokio::test]
    async fn dangling_category_is_stored_as_is() {
        let pool = init_in_memory().await.unwrap();

        let pear = new_product(Some("Pear"), 5, Some(999));
        let orphan = create_product(&pool, &pear, Some("pear.png")).await.unwrap();

        assert_eq!(orphan.category_id, Some(999));
        assert_eq!(orphan.category_name, None);
        assert_eq!(orphan.image_filename.as_deref(), Some("pear.png"));
    }

    #[tokio::test]
    async fn keyword_search_matches_substring_filter() {
        let pool = init_in_memory().await.unwrap();
        for (content, price) in [
            (Some("Apple"), 50),
            (Some("Pineapple"), 80),
            (Some("apple pie"), 120),
            (Some("100% juice"), 30),
            (None, 10),
        ] {
            create_product(&pool, &new_product(content, price, None), None)
                .await
                .unwrap();
        }

        let all = list_products(&pool).await.unwrap();
        assert_eq!(find_products_by_keyword(&pool, "").await.unwrap(), all);

        for keyword in ["App", "apple", "pple", "%", "_", "zzz", "Pineapple pie"] {
            let expected: Vec<Product> = all
                .iter()
                .filter(|p| p.content.as_deref().is_some_and(|c| c.contains(keyword)))
                .cloned()
                .collect();

            let found = find_products_by_keyword(&pool, keyword).await.unwrap();
            assert_eq!(found, expected, "keyword {keyword:?}");
        }
    }

    #[tokio::test]
    async fn search_scenario() {
        let pool = init_in_memory().await.unwrap();
        let fruit = create_category(&pool, "Fruit").await.unwrap();
        let apple = create_product(&pool, &new_product(Some("Apple"), 50, Some(fruit.id)), None)
            .await
            .unwrap();

        assert_eq!(find_products_by_keyword(&pool, "App").await.unwrap(), vec![apple]);
        assert!(find_products_by_keyword(&pool, "zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_product_is_none() {
        let pool = init_in_memory().await.unwrap();
        assert_eq!(get_product(&pool, 42).await.unwrap(), None);
    }
}
