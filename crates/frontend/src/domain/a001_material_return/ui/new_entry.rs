use crate::domain::a001_material_return::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::backend::transport;
use crate::shared::file_upload::FileUpload;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::alert;
use contracts::domain::a001_material_return::request::TRANSPORT_PAYMENT_OPTIONS;
use contracts::domain::a001_material_return::{next_return_no, NewReturnDto};
use contracts::shared::api::OrderInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "New Material Return Entry" dialog
#[component]
pub fn NewEntryForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let form = RwSignal::new(NewReturnDto::new(String::new()));
    let orders = RwSignal::new(Vec::<OrderInfo>::new());
    let (orders_loading, set_orders_loading) = signal(true);
    let (orders_error, set_orders_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    // the number follows the data store, so a refresh while open keeps it current
    Effect::new(move |_| {
        let next = ctx
            .data
            .with(|d| next_return_no(d.returns.iter().map(|r| r.return_no.as_str())));
        form.update(|f| f.return_no = next);
    });

    let load_orders = move || {
        set_orders_loading.set(true);
        set_orders_error.set(None);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(lookup) => {
                    log::debug!("loaded {} orders", lookup.orders.len());
                    orders.set(lookup.orders);
                }
                Err(e) => {
                    log::error!("getOrderData failed: {}", e);
                    orders.set(Vec::new());
                    let message = if transport().is_live() {
                        "Unable to connect to the server. Please check your connection."
                    } else {
                        "Network connection error. Please try again."
                    };
                    set_orders_error.set(Some(message.to_string()));
                }
            }
            set_orders_loading.set(false);
        });
    };
    load_orders();

    let handle_submit = move |_| {
        let dto = form.get_untracked();
        if let Err(msg) = dto.validate() {
            alert(&msg);
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let result = api::add_initial_entry(&dto).await;
            set_submitting.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("created {}", dto.return_no);
                    ctx.close_modal();
                    ctx.after_write(outcome, "The new entry");
                }
                Err(e) => {
                    log::error!("addInitialEntry failed: {}", e);
                    alert(&format!("Submission error: {}", e));
                }
            }
        });
    };

    let on_close = Callback::new(move |_| ctx.close_modal());

    view! {
        <ModalFrame
            title="New Material Return Entry"
            subtitle="Fill in the details to start a new return request"
            on_close=on_close
            modal_class="modal--wide"
        >
            {move || orders_error.get().map(|msg| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <Flex gap=FlexGap::Small style="align-items:center;width:100%;justify-content:space-between;">
                        <span>{msg}</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| load_orders()
                            disabled=Signal::derive(move || orders_loading.get())
                        >
                            {icon("refresh")}
                            "Retry"
                        </Button>
                    </Flex>
                </MessageBar>
            })}

            <section class="form__section">
                <h3 class="form__section-title">{icon("file-text")}"Document Numbers"</h3>
                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Return Number"</label>
                        <input class="form__input" readonly prop:value=move || form.with(|f| f.return_no.clone()) />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Delivery Order Number"</label>
                        <select
                            class="form__input"
                            disabled=move || orders_loading.get()
                            prop:value=move || form.with(|f| f.do_number.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                orders.with_untracked(|list| form.update(|f| f.select_order(&value, list)));
                            }
                        >
                            <option value="">
                                {move || if orders_loading.get() { "Loading orders..." } else { "Select a DO number" }}
                            </option>
                            {move || orders.get().into_iter().map(|order| {
                                let text = if order.party_names.is_empty() {
                                    order.do_number.clone()
                                } else {
                                    format!("{} - {}", order.do_number, order.party_names)
                                };
                                view! { <option value=order.do_number>{text}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </section>

            <section class="form__section">
                <h3 class="form__section-title">{icon("package")}"Party & Product Details"</h3>
                <div class="form__group">
                    <label class="form__label">"Party Name"</label>
                    <input
                        class="form__input"
                        readonly
                        placeholder="Will be auto-filled when you select a DO number"
                        prop:value=move || form.with(|f| f.party_names.clone())
                    />
                </div>
                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Product Name"</label>
                        <input
                            class="form__input"
                            readonly
                            placeholder="Will be auto-filled when you select a DO number"
                            prop:value=move || form.with(|f| f.product_name.clone())
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Quantity"</label>
                        <input
                            class="form__input"
                            placeholder="e.g., 50 MT, 100 Units"
                            prop:value=move || form.with(|f| f.qty.clone())
                            on:input=move |ev| form.update(|f| f.qty = event_target_value(&ev))
                        />
                    </div>
                </div>
            </section>

            <section class="form__section">
                <h3 class="form__section-title">{icon("truck")}"Transport & Documentation"</h3>
                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Transport Payment Type"</label>
                        <select
                            class="form__input"
                            prop:value=move || form.with(|f| f.transport_payment.clone())
                            on:change=move |ev| form.update(|f| f.transport_payment = event_target_value(&ev))
                        >
                            {TRANSPORT_PAYMENT_OPTIONS.iter().map(|opt| view! {
                                <option value=*opt>{*opt}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <FileUpload
                        label="Upload Debit Note"
                        on_upload=move |url: String| form.update(|f| f.debit_note = url)
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Reason for Material Return"</label>
                    <textarea
                        class="form__input"
                        rows="3"
                        placeholder="Please provide detailed reason for material return..."
                        prop:value=move || form.with(|f| f.reason_of_material_return.clone())
                        on:input=move |ev| form.update(|f| f.reason_of_material_return = event_target_value(&ev))
                    />
                </div>
            </section>

            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.close_modal()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Entry" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
