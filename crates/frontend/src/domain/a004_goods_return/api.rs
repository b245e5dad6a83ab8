use contracts::domain::a004_goods_return::{GoodsReturn, GoodsReturnDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить возврат по ID
pub async fn fetch_return(id: &str) -> Result<GoodsReturn, String> {
    let response = Request::get(&format!("{}/api/a004/goods-returns/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch return: {}", response.status()));
    }

    response
        .json::<GoodsReturn>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать возврат
pub async fn create_return(dto: GoodsReturnDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a004/goods-returns", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create return: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Обновить возврат
pub async fn update_return(id: &str, dto: GoodsReturnDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/a004/goods-returns/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update return: {}", response.status()));
    }

    Ok(())
}

/// Удалить возврат
pub async fn delete_return(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a004/goods-returns/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete return: {}", response.status()));
    }

    Ok(())
}
