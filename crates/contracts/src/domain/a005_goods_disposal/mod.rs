pub mod aggregate;

pub use aggregate::{GoodsDisposal, GoodsDisposalDto, GoodsDisposalId};
