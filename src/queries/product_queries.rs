use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{Category, NewProduct, Product},
};

/// Inserts a new row and returns it with the store-assigned id.
pub async fn create(pool: &PgPool, new: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, available, category)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.price)
    .bind(new.available)
    .bind(new.category)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Created product {} ({})", product.id, product.name);

    Ok(product)
}

/// Rewrites the stored row matching `product.id` with the product's current
/// field values. Fails with `NotFound` if no such row exists.
pub async fn update(pool: &PgPool, product: &Product) -> Result<Product> {
    let updated = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET name = $1, description = $2, price = $3, available = $4, category = $5
         WHERE id = $6
         RETURNING *",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.available)
    .bind(product.category)
    .bind(product.id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", product.id)))?;

    tracing::debug!("Updated product {}", updated.id);

    Ok(updated)
}

/// Removes the row matching `id`. Deleting an id that is not stored is a
/// no-op; the return value reports whether a row was actually removed.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    tracing::debug!("Deleted product {}", id);

    Ok(result.rows_affected() > 0)
}

/// Every stored product in insertion order, materialized eagerly.
pub async fn all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// `None` for an id that was never assigned or has been deleted.
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// All products whose name matches exactly.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE name = $1 ORDER BY id")
            .bind(name)
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn find_by_availability(pool: &PgPool, available: bool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE available = $1 ORDER BY id")
            .bind(available)
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn find_by_category(pool: &PgPool, category: Category) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category = $1 ORDER BY id")
            .bind(category)
            .fetch_all(pool)
            .await?;

    Ok(products)
}
