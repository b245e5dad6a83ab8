use contracts::domain::a005_goods_disposal::{GoodsDisposal, GoodsDisposalDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить все списания
pub async fn fetch_disposals() -> Result<Vec<GoodsDisposal>, String> {
    let response = Request::get(&format!("{}/api/a005/goods-disposals", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch disposals: {}", response.status()));
    }

    response
        .json::<Vec<GoodsDisposal>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать списание
pub async fn create_disposal(dto: GoodsDisposalDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a005/goods-disposals", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create disposal: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Обновить списание
pub async fn update_disposal(id: &str, dto: GoodsDisposalDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/a005/goods-disposals/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update disposal: {}", response.status()));
    }

    Ok(())
}

/// Удалить списание
pub async fn delete_disposal(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a005/goods-disposals/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete disposal: {}", response.status()));
    }

    Ok(())
}
