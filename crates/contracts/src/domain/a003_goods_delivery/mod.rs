pub mod aggregate;

pub use aggregate::{GoodsDelivery, GoodsDeliveryDto, GoodsDeliveryId};
