use crate::domain::a002_transporter_payment::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::form_field::summary_item;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::alert;
use chrono::Utc;
use contracts::domain::a002_transporter_payment::{PaymentDoneDto, TransporterPayment};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "Mark Payment Done" confirmation for one kitting record
#[component]
pub fn PaymentUpdateModal(payment: TransporterPayment) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let row_id = payment.row_id;
    let payment_number = payment.payment_number.clone();
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let handle_mark_done = move |_| {
        set_submitting.set(true);
        set_error.set(None);
        let done = PaymentDoneDto::at(Utc::now());
        let payment_number = payment_number.clone();
        spawn_local(async move {
            let result = api::update_kitting_payment(row_id, &done).await;
            set_submitting.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("{} marked as paid", payment_number);
                    ctx.close_modal();
                    ctx.after_write(outcome, "The payment update");
                }
                Err(e) => {
                    log::error!("updateKittingPayment failed for {}: {}", payment_number, e);
                    set_error.set(Some(e.to_string()));
                    alert(&format!("Failed to update payment: {}", e));
                }
            }
        });
    };

    view! {
        <ModalFrame
            title="Mark Payment Done"
            subtitle=payment.payment_number.clone()
            on_close=Callback::new(move |_| ctx.close_modal())
        >
            <div class="summary">
                {summary_item("Transporter", payment.transporter_name.clone())}
                {summary_item("Vehicle", payment.vehicle_number.clone())}
                {summary_item("Amount", format!("₹{}", payment.amount))}
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="modal__footer modal__footer--stacked">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_mark_done
                    disabled=Signal::derive(move || submitting.get())
                >
                    {icon("check-circle")}
                    {move || if submitting.get() { "Marking as Done..." } else { "Mark Payment as Done" }}
                </Button>
                <p class="modal__note">"Click to mark this payment as completed"</p>
            </div>
        </ModalFrame>
    }
}
