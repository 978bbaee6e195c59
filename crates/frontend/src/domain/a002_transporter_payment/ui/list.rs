use crate::layout::global_context::{ActiveModal, AppGlobalContext};
use crate::shared::cells::cell_view;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a002_transporter_payment::columns::{cell_value, PAYMENT_COLUMNS};
use contracts::domain::a002_transporter_payment::TransporterPayment;
use contracts::shared::search::filter_payments;
use contracts::system::access::{payment_action, PaymentAction};
use leptos::prelude::*;
use thaw::*;

/// Kitting view: transporter payments and their settlement
#[component]
#[allow(non_snake_case)]
pub fn PaymentTable() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();
    let search = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let term = search.get();
        ctx.data.with(|data| {
            filter_payments(&data.payments, &term)
                .into_iter()
                .cloned()
                .collect::<Vec<TransporterPayment>>()
        })
    });

    let action_cell = move |payment: TransporterPayment| {
        let action = session.user.with(|u| match u {
            Some(user) => payment_action(user, &payment),
            None => PaymentAction::Locked,
        });
        match action {
            PaymentAction::Paid => view! {
                <span class="table__status table__status--done">{icon("check-circle")}"Paid"</span>
            }
            .into_any(),
            PaymentAction::ProcessPayment => view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_modal(ActiveModal::ProcessPayment(payment.clone()))
                >
                    {icon("credit-card")}
                    "Process Payment"
                </Button>
            }
            .into_any(),
            PaymentAction::Locked => view! {
                <span class="table__status table__status--locked">{icon("lock")}"No Permission"</span>
            }
            .into_any(),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div>
                    <h2 class="header__title">"Payment Kitting View"</h2>
                    <p class="header__subtitle">
                        {move || {
                            let n = rows.with(|r| r.len());
                            format!("Showing {} {}", n, if n == 1 { "record" } else { "records" })
                        }}
                    </p>
                </div>
                <div class="header__actions">
                    <Input
                        value=search
                        placeholder="Search payments, transporters..."
                        attr:style="width: 320px;"
                    />
                </div>
            </div>

            <Show
                when=move || !rows.with(|r| r.is_empty())
                fallback=move || {
                    let searching = !search.with(|s| s.is_empty());
                    view! {
                        <div class="empty-state">
                            {icon("credit-card")}
                            <h3>{if searching { "No matching records found" } else { "No data available" }}</h3>
                            <p>
                                {if searching {
                                    "Try adjusting your search terms to find what you're looking for."
                                } else {
                                    "No returns have been forwarded to kitting yet."
                                }}
                            </p>
                        </div>
                    }
                }
            >
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {PAYMENT_COLUMNS.iter().map(|c| view! {
                                    <th class="table__header-cell">{c.label}</th>
                                }).collect_view()}
                                <th class="table__header-cell table__header-cell--sticky">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows.get().into_iter().map(|payment| {
                                let cells = PAYMENT_COLUMNS.iter().map(|c| {
                                    let value = cell_value(&payment, c.key);
                                    view! { <td class="table__cell">{cell_view(c.kind, value)}</td> }
                                }).collect_view();
                                view! {
                                    <tr class="table__row">
                                        {cells}
                                        <td class="table__cell table__cell--sticky">{action_cell(payment)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="table__footer">
                {move || format!("Total: {} records", rows.with(|r| r.len()))}
            </div>
        </div>
    }
}
