pub mod aggregate;

pub use aggregate::{GoodsPurchase, GoodsPurchaseDto, GoodsPurchaseId};
