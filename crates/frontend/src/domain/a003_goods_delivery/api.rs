use contracts::domain::a003_goods_delivery::{GoodsDelivery, GoodsDeliveryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить все поставки
pub async fn fetch_deliveries() -> Result<Vec<GoodsDelivery>, String> {
    let response = Request::get(&format!("{}/api/a003/goods-deliveries", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch deliveries: {}", response.status()));
    }

    response
        .json::<Vec<GoodsDelivery>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать поставку
pub async fn create_delivery(dto: GoodsDeliveryDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a003/goods-deliveries", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create delivery: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Обновить поставку
pub async fn update_delivery(id: &str, dto: GoodsDeliveryDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/a003/goods-deliveries/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update delivery: {}", response.status()));
    }

    Ok(())
}

/// Удалить поставку
pub async fn delete_delivery(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a003/goods-deliveries/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete delivery: {}", response.status()));
    }

    Ok(())
}
