pub mod common;

pub mod a001_product;
pub mod a002_goods_purchase;
pub mod a003_goods_delivery;
pub mod a004_goods_return;
pub mod a005_goods_disposal;
pub mod a006_price_record;
