use contracts::domain::a001_product::{Product, ProductDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить все товары
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/a001/products", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать товар
pub async fn create_product(dto: ProductDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a001/products", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create product: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Обновить товар
pub async fn update_product(id: &str, dto: ProductDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/a001/products/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update product: {}", response.status()));
    }

    Ok(())
}

/// Удалить товар
pub async fn delete_product(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a001/products/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete product: {}", response.status()));
    }

    Ok(())
}
