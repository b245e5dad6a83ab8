pub mod aggregate;

pub use aggregate::{GoodsReturn, GoodsReturnDto, GoodsReturnId};
