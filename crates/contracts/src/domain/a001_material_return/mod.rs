pub mod aggregate;
pub mod columns;
pub mod numbering;
pub mod request;

pub use aggregate::MaterialReturn;
pub use numbering::next_return_no;
pub use request::{
    CreditNoteUpdate, DispatchUpdate, LogisticsUpdate, NewReturnDto, ReceivingUpdate, StepUpdate,
};
