pub mod forward;
pub mod list;
pub mod payment;
