pub mod aggregate;
pub mod columns;
pub mod numbering;
pub mod request;

pub use aggregate::{is_kitted, TransporterPayment};
pub use numbering::next_payment_number;
pub use request::{NewPaymentDto, PaymentDoneDto};
