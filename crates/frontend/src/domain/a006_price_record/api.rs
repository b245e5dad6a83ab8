use contracts::domain::a006_price_record::{PriceRecord, PriceRecordDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Получить все записи цен
pub async fn fetch_prices() -> Result<Vec<PriceRecord>, String> {
    let response = Request::get(&format!("{}/api/a006/price-records", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch prices: {}", response.status()));
    }

    response
        .json::<Vec<PriceRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Установить новую цену.
/// Предыдущая действующая запись по товару закрывается на бэкенде.
pub async fn create_price(dto: PriceRecordDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/a006/price-records", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create price record: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Удалить запись цены
pub async fn delete_price(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/a006/price-records/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete price record: {}", response.status()));
    }

    Ok(())
}
