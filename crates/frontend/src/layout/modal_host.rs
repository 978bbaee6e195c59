use crate::domain::a001_material_return::ui::new_entry::NewEntryForm;
use crate::domain::a001_material_return::ui::update_step::UpdateStepModal;
use crate::domain::a002_transporter_payment::ui::forward::ForwardToKittingModal;
use crate::domain::a002_transporter_payment::ui::payment::PaymentUpdateModal;
use crate::layout::global_context::{ActiveModal, AppGlobalContext};
use leptos::prelude::*;

/// Renders whichever dialog `AppGlobalContext::modal` holds
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || {
        ctx.modal.get().map(|modal| match modal {
            ActiveModal::NewEntry => view! { <NewEntryForm /> }.into_any(),
            ActiveModal::UpdateStep(record) => view! { <UpdateStepModal record=record /> }.into_any(),
            ActiveModal::ForwardToKitting(record) => {
                view! { <ForwardToKittingModal record=record /> }.into_any()
            }
            ActiveModal::ProcessPayment(payment) => {
                view! { <PaymentUpdateModal payment=payment /> }.into_any()
            }
        })
    }
}
