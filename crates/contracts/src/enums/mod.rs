pub mod delivery_status;
pub mod disposal_method;

pub use delivery_status::DeliveryStatus;
pub use disposal_method::DisposalMethod;
