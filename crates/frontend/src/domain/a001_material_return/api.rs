use crate::shared::backend;
use contracts::domain::a001_material_return::{NewReturnDto, StepUpdate};
use contracts::shared::api::{ActionRequest, ApiError, BackendAction, OrderLookup, WriteOutcome};

/// Orders and transporters for the entry forms (`getOrderData`)
pub async fn fetch_orders() -> Result<OrderLookup, ApiError> {
    let value = backend::read(BackendAction::GetOrderData).await?;
    Ok(OrderLookup::from_value(&value))
}

/// Creates a request (`addInitialEntry`)
pub async fn add_initial_entry(dto: &NewReturnDto) -> Result<WriteOutcome, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    backend::write(ActionRequest::new(BackendAction::AddInitialEntry, dto)).await
}

/// Completes the current step of a request (`updateWorkflowStep`).
/// The backend stamps `actualN` and computes the delay.
pub async fn update_workflow_step(row_id: i64, update: &StepUpdate) -> Result<WriteOutcome, ApiError> {
    update.validate().map_err(ApiError::Validation)?;
    let request = ActionRequest::new(BackendAction::UpdateWorkflowStep, update)
        .with_row(row_id)
        .with_step(update.step().number());
    backend::write(request).await
}
