use contracts::domain::a002_goods_purchase::{GoodsPurchase, GoodsPurchaseDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить все закупки
pub async fn fetch_purchases() -> Result<Vec<GoodsPurchase>, String> {
    let response = Request::get(&format!("{}/api/a002/goods-purchases", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch purchases: {}", response.status()));
    }

    response
        .json::<Vec<GoodsPurchase>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать закупку
pub async fn create_purchase(dto: GoodsPurchaseDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a002/goods-purchases", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create purchase: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Обновить закупку
pub async fn update_purchase(id: &str, dto: GoodsPurchaseDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/a002/goods-purchases/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update purchase: {}", response.status()));
    }

    Ok(())
}

/// Удалить закупку
pub async fn delete_purchase(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a002/goods-purchases/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete purchase: {}", response.status()));
    }

    Ok(())
}
