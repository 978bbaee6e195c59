use crate::shared::backend;
use contracts::domain::a002_transporter_payment::{NewPaymentDto, PaymentDoneDto};
use contracts::shared::api::{ActionRequest, ApiError, BackendAction, WriteOutcome};

/// Forwards a completed return to kitting (`addKittingEntry`)
pub async fn add_kitting_entry(dto: &NewPaymentDto) -> Result<WriteOutcome, ApiError> {
    let payload = dto.for_submission();
    backend::write(ActionRequest::new(BackendAction::AddKittingEntry, payload)).await
}

/// Marks a payment as done (`updateKittingPayment`)
pub async fn update_kitting_payment(row_id: i64, done: &PaymentDoneDto) -> Result<WriteOutcome, ApiError> {
    backend::write(ActionRequest::new(BackendAction::UpdateKittingPayment, done).with_row(row_id)).await
}
