pub mod aggregate;

pub use aggregate::{PriceRecord, PriceRecordDto, PriceRecordId};
