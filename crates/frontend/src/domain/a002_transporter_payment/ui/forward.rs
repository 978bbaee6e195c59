use crate::domain::a002_transporter_payment::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::file_upload::FileUpload;
use crate::shared::form_field::{summary_item, text_field};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::alert;
use chrono::{Datelike, Utc};
use contracts::domain::a001_material_return::MaterialReturn;
use contracts::domain::a002_transporter_payment::{next_payment_number, NewPaymentDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PROCEED_YES: &str = "Yes";
const PROCEED_NO: &str = "No";

/// Creates the kitting entry for a completed return
#[component]
pub fn ForwardToKittingModal(record: MaterialReturn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let payment_number = ctx.data.with_untracked(|d| {
        next_payment_number(
            d.payments.iter().map(|p| p.payment_number.as_str()),
            Utc::now().year(),
        )
    });
    let form = RwSignal::new(NewPaymentDto::from_return(&record, payment_number));
    let proceed = RwSignal::new(PROCEED_YES.to_string());
    let (submitting, set_submitting) = signal(false);

    let is_locked = move || proceed.with(|p| p == PROCEED_NO);

    let handle_submit = move |_| {
        if is_locked() {
            alert("Submission is restricted when status is 'No'. All options are hidden and workflow is locked.");
            return;
        }
        let dto = form.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            let result = api::add_kitting_entry(&dto).await;
            set_submitting.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("{} forwarded to kitting as {}", dto.unique_number, dto.payment_number);
                    ctx.close_modal();
                    ctx.after_write(outcome, "The kitting entry");
                }
                Err(e) => {
                    log::error!("addKittingEntry failed: {}", e);
                    alert(&format!("Failed to save data to Kitting FMS: {}", e));
                }
            }
        });
    };

    view! {
        <ModalFrame
            title="Forward to Kitting"
            subtitle="Create a transporter payment for this return"
            on_close=Callback::new(move |_| ctx.close_modal())
            modal_class="modal--wide"
        >
            <section class="form__section">
                <h3 class="form__section-title">"Basic Information"</h3>
                <div class="summary">
                    {summary_item("Payment Number (Auto-generated)", form.with_untracked(|f| f.payment_number.clone()))}
                    {summary_item("Unique Return Number", form.with_untracked(|f| f.unique_number.clone()))}
                </div>
                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <Select value=proceed>
                        <option value=PROCEED_YES>"Yes - Send to Kitting Process"</option>
                        <option value=PROCEED_NO>"No - Hold"</option>
                    </Select>
                </div>
            </section>

            <Show
                when=move || !is_locked()
                fallback=|| view! {
                    <div class="empty-state empty-state--compact">
                        {icon("lock")}
                        <h3>"Kitting Process Locked"</h3>
                        <p>"Select 'Yes - Send to Kitting Process' in the status dropdown above to enable kitting entry fields."</p>
                    </div>
                }
            >
                <section class="form__section">
                    <h3 class="form__section-title">{icon("truck")}"Transport Details"</h3>
                    <div class="form__grid">
                        {text_field(form, "Transporter Name", "Enter transporter name", "text",
                            |f| &f.transporter_name, |f, v| f.transporter_name = v)}
                        {text_field(form, "Vehicle Number", "Enter vehicle registration number", "text",
                            |f| &f.vehicle_number, |f, v| f.vehicle_number = v)}
                    </div>
                    <div class="form__grid">
                        {text_field(form, "From Location (Loading Point)", "Enter loading location", "text",
                            |f| &f.from_location, |f, v| f.from_location = v)}
                        {text_field(form, "To Location (Destination)", "Enter destination", "text",
                            |f| &f.to_location, |f, v| f.to_location = v)}
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Material Load Details"</label>
                        <textarea
                            class="form__input"
                            rows="2"
                            placeholder="Enter material and loading details"
                            prop:value=move || form.with(|f| f.material_load_details.clone())
                            on:input=move |ev| form.update(|f| f.material_load_details = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__grid">
                        {text_field(form, "Bilty Number", "Enter bilty number", "text",
                            |f| &f.bilty_number, |f, v| f.bilty_number = v)}
                        {text_field(form, "Rate Type", "Enter rate type", "text",
                            |f| &f.rate_type, |f, v| f.rate_type = v)}
                    </div>
                    {text_field(form, "Total Amount", "0.00", "number",
                        |f| &f.amount, |f, v| f.amount = v)}
                    <FileUpload
                        label="Upload Bilty Image / Dispatch Proof"
                        on_upload=move |url: String| form.update(|f| f.bilty_image = url)
                    />
                </section>
            </Show>

            <div class="summary summary--muted">
                {summary_item("Party", record.party_names.clone())}
                {summary_item("Product", record.product_name.clone())}
            </div>

            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.close_modal()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=Signal::derive(move || submitting.get() || is_locked())
                >
                    {move || {
                        if submitting.get() {
                            "Saving..."
                        } else if is_locked() {
                            "Submission Locked"
                        } else {
                            "Send to Kitting"
                        }
                    }}
                </Button>
            </div>
        </ModalFrame>
    }
}
