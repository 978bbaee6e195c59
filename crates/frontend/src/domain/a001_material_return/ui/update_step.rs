use crate::domain::a001_material_return::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::file_upload::FileUpload;
use crate::shared::form_field::{summary_item, text_field};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::alert;
use contracts::domain::a001_material_return::request::{MAIL_NOT_SENT, MAIL_SENT, RATE_FIXED, RATE_PER_MT};
use contracts::domain::a001_material_return::{
    CreditNoteUpdate, DispatchUpdate, LogisticsUpdate, MaterialReturn, ReceivingUpdate, StepUpdate,
};
use contracts::enums::WorkflowStep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Step 1: transporter, vehicle and rate
fn logistics_form(form: RwSignal<LogisticsUpdate>) -> impl IntoView {
    let transporters = RwSignal::new(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_orders().await {
            Ok(lookup) => transporters.set(lookup.transporters),
            Err(e) => log::error!("failed to load transporters: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="form__group">
            <label class="form__label">"Transporter Name"</label>
            <select
                class="form__input"
                disabled=move || loading.get()
                prop:value=move || form.with(|f| f.transporter_name.clone())
                on:change=move |ev| form.update(|f| f.transporter_name = event_target_value(&ev))
            >
                <option value="">
                    {move || if loading.get() { "Loading transporters..." } else { "Select a transporter" }}
                </option>
                {move || transporters.get().into_iter().map(|name| view! {
                    <option value=name.clone()>{name.clone()}</option>
                }).collect_view()}
            </select>
        </div>
        <div class="form__grid">
            {text_field(form, "Vehicle Number", "Enter vehicle registration number", "text",
                |f| &f.vehicle_no, |f, v| f.vehicle_no = v)}
            {text_field(form, "Bilty Number", "Enter bilty number", "text",
                |f| &f.bilty_no, |f, v| f.bilty_no = v)}
        </div>
        {text_field(form, "Received Date", "", "date",
            |f| &f.received_date, |f, v| f.received_date = v)}
        <fieldset class="form__fieldset">
            <legend class="form__legend">"Rate Information"</legend>
            <div class="form__group">
                <label class="form__label">"Rate Type"</label>
                <select
                    class="form__input"
                    prop:value=move || form.with(|f| f.type_of_rate.clone())
                    on:change=move |ev| form.update(|f| f.type_of_rate = event_target_value(&ev))
                >
                    <option value=RATE_PER_MT>"Per Metric Ton"</option>
                    <option value=RATE_FIXED>"Fixed Amount"</option>
                </select>
            </div>
            {move || if form.with(|f| f.is_per_mt()) {
                text_field(form, "Per Metric Ton Rate", "Enter rate per metric ton", "number",
                    |f| &f.per_matric_ton_rate, |f, v| f.per_matric_ton_rate = v).into_any()
            } else {
                text_field(form, "Fixed Amount", "Enter fixed amount", "number",
                    |f| &f.fixed_amount, |f, v| f.fixed_amount = v).into_any()
            }}
        </fieldset>
    }
}

/// Step 2: what came back and in which condition
fn receiving_form(form: RwSignal<ReceivingUpdate>) -> impl IntoView {
    view! {
        <div class="form__grid">
            {text_field(form, "Returned Quantity", "e.g., 10 MT, 25 Units", "text",
                |f| &f.qty_of_return_material, |f, v| f.qty_of_return_material = v)}
            {text_field(form, "Material Rate", "Enter rate per unit", "number",
                |f| &f.rate_of_material, |f, v| f.rate_of_material = v)}
        </div>
        <div class="form__group">
            <label class="form__label">"Condition of Material"</label>
            <textarea
                class="form__input"
                rows="2"
                placeholder="Describe material condition (Good, Damaged, etc.)"
                prop:value=move || form.with(|f| f.condition_of_material.clone())
                on:input=move |ev| form.update(|f| f.condition_of_material = event_target_value(&ev))
            />
        </div>
        <div class="form__grid">
            {text_field(form, "Party Debit Note No.", "Enter document number", "text",
                |f| &f.party_debit_note_no, |f, v| f.party_debit_note_no = v)}
            {text_field(form, "Material Return No.", "Enter return number", "text",
                |f| &f.material_return_no, |f, v| f.material_return_no = v)}
        </div>
        <div class="form__grid">
            <FileUpload
                label="Bilty Copy / Photo"
                on_upload=move |url: String| form.update(|f| f.photo_of_return_material = url)
            />
            <FileUpload
                label="Original Bill Image"
                on_upload=move |url: String| form.update(|f| f.original_bill_image = url)
            />
        </div>
    }
}

/// Step 3: bill and credit note
fn credit_note_form(form: RwSignal<CreditNoteUpdate>) -> impl IntoView {
    view! {
        <div class="form__grid">
            {text_field(form, "Bill Number", "Enter bill number", "text",
                |f| &f.bill_no, |f, v| f.bill_no = v)}
            {text_field(form, "Amount", "Enter total amount", "number",
                |f| &f.amount, |f, v| f.amount = v)}
        </div>
        {text_field(form, "Credit Note Number", "Enter credit note number", "text",
            |f| &f.credit_note_no, |f, v| f.credit_note_no = v)}
        <FileUpload
            label="Credit Note Copy"
            on_upload=move |url: String| form.update(|f| f.credit_note_copy = url)
        />
    }
}

/// Step 4: whether the credit note was mailed to the party
fn dispatch_form(form: RwSignal<DispatchUpdate>) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--info">
            <span class="warning-box__icon">{icon("send")}</span>
            <span class="warning-box__text">"Dispatch Credit Note to Party"</span>
        </div>
        <div class="form__group">
            <label class="form__label">"Mail Status"</label>
            <select
                class="form__input"
                prop:value=move || form.with(|f| f.send_to_mail.clone())
                on:change=move |ev| form.update(|f| f.send_to_mail = event_target_value(&ev))
            >
                <option value=MAIL_NOT_SENT>"Not Sent - Process Manually"</option>
                <option value=MAIL_SENT>"Sent to Party Email"</option>
            </select>
        </div>
    }
}

/// Completes the record's current step. The derived step picks the form.
#[component]
pub fn UpdateStepModal(record: MaterialReturn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let step = record.current_step();
    let row_id = record.row_id;

    let logistics = RwSignal::new(LogisticsUpdate::default());
    let receiving = RwSignal::new(ReceivingUpdate::default());
    let credit_note = RwSignal::new(CreditNoteUpdate::default());
    let dispatch = RwSignal::new(DispatchUpdate::default());
    let (submitting, set_submitting) = signal(false);

    let collect = move || -> Option<StepUpdate> {
        match step {
            WorkflowStep::Step1 => Some(StepUpdate::Logistics(logistics.get_untracked())),
            WorkflowStep::Step2 => Some(StepUpdate::Receiving(receiving.get_untracked())),
            WorkflowStep::Step3 => Some(StepUpdate::CreditNote(credit_note.get_untracked())),
            WorkflowStep::Step4 => Some(StepUpdate::Dispatch(dispatch.get_untracked())),
            WorkflowStep::Completed => None,
        }
    };

    let handle_submit = move |_| {
        let Some(update) = collect() else {
            return;
        };
        if let Err(msg) = update.validate() {
            alert(&msg);
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let result = api::update_workflow_step(row_id, &update).await;
            set_submitting.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("row {}: {} completed", row_id, update.step().title());
                    ctx.close_modal();
                    ctx.after_write(outcome, "The step update");
                }
                Err(e) => {
                    log::error!("updateWorkflowStep failed for row {}: {}", row_id, e);
                    alert(&format!("Update Error: {}", e));
                }
            }
        });
    };

    let body = match step {
        WorkflowStep::Step1 => logistics_form(logistics).into_any(),
        WorkflowStep::Step2 => receiving_form(receiving).into_any(),
        WorkflowStep::Step3 => credit_note_form(credit_note).into_any(),
        WorkflowStep::Step4 => dispatch_form(dispatch).into_any(),
        WorkflowStep::Completed => view! {
            <p class="modal__note">"This return has completed every step."</p>
        }
        .into_any(),
    };

    view! {
        <ModalFrame
            title=step.title()
            subtitle=format!("{} · {}", record.return_no, step.instructions())
            on_close=Callback::new(move |_| ctx.close_modal())
        >
            <div class="summary">
                {summary_item("Party", record.party_names.clone())}
                {summary_item("Product", record.product_name.clone())}
                {summary_item("DO Number", record.do_number.clone())}
                {summary_item("Quantity", record.qty.clone())}
            </div>

            {body}

            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.close_modal()>
                    "Cancel"
                </Button>
                <Show when=move || !step.is_completed()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Saving..." } else { "Complete Step" }}
                    </Button>
                </Show>
            </div>
        </ModalFrame>
    }
}
