use crate::layout::global_context::{ActiveModal, AppGlobalContext};
use crate::shared::cells::cell_view;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a001_material_return::columns::{cell_value, columns_for};
use contracts::domain::a001_material_return::MaterialReturn;
use contracts::enums::ViewId;
use contracts::shared::search::filter_returns;
use contracts::system::access::{row_action, RowAction};
use leptos::prelude::*;
use thaw::*;

/// Request table for the explorer and the four step views
#[component]
#[allow(non_snake_case)]
pub fn WorkflowTable(view_id: ViewId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();
    let search = RwSignal::new(String::new());
    let columns = StoredValue::new(columns_for(view_id));

    let rows = Memo::new(move |_| {
        let term = search.get();
        ctx.data.with(|data| {
            filter_returns(&data.returns, &term, view_id)
                .into_iter()
                .cloned()
                .collect::<Vec<MaterialReturn>>()
        })
    });

    let heading = match view_id.step() {
        Some(step) => format!("Workflow › Step {}: {}", step.number(), view_id.title()),
        None => "Complete Data Explorer".to_string(),
    };

    let action_cell = move |record: MaterialReturn| {
        let action = session.user.with(|u| match u {
            Some(user) => ctx
                .data
                .with(|data| row_action(user, &record, &data.payments)),
            None => RowAction::Locked,
        });
        match action {
            RowAction::Kitted => view! {
                <span class="table__status table__status--done">{icon("check-circle")}"Kitted"</span>
            }
            .into_any(),
            RowAction::ForwardToKitting => view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_modal(ActiveModal::ForwardToKitting(record.clone()))
                >
                    "Forward to Kitting"
                </Button>
            }
            .into_any(),
            RowAction::UpdateStep(_) => view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_modal(ActiveModal::UpdateStep(record.clone()))
                >
                    "Update Step"
                </Button>
            }
            .into_any(),
            RowAction::Locked => view! {
                <span class="table__status table__status--locked">{icon("lock")}"No Permission"</span>
            }
            .into_any(),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div>
                    <h2 class="header__title">{heading}</h2>
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
                        placeholder="Search by party, return number, product..."
                        attr:style="width: 320px;"
                    />
                </div>
            </div>

            {move || {
                if rows.with(|r| r.is_empty()) {
                    let searching = !search.with(|s| s.is_empty());
                    return view! {
                        <div class="empty-state">
                            {icon("search")}
                            <h3>{if searching { "No matching records found" } else { "No data available" }}</h3>
                            <p>
                                {if searching {
                                    "Try adjusting your search terms or filters to find what you're looking for."
                                } else {
                                    "There are currently no records in this view. Check back later or add new entries."
                                }}
                            </p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    {columns.with_value(|cols| cols.iter().map(|c| view! {
                                        <th class="table__header-cell">{c.label}</th>
                                    }).collect_view())}
                                    <th class="table__header-cell table__header-cell--sticky">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || rows.get().into_iter().map(|record| {
                                    let cells = columns.with_value(|cols| {
                                        cols.iter()
                                            .map(|c| {
                                                let value = cell_value(&record, c.key).to_string();
                                                view! { <td class="table__cell">{cell_view(c.kind, value)}</td> }
                                            })
                                            .collect_view()
                                    });
                                    view! {
                                        <tr class="table__row">
                                            {cells}
                                            <td class="table__cell table__cell--sticky">{action_cell(record)}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            <div class="table__footer">
                {move || format!("Total: {} records", rows.with(|r| r.len()))}
            </div>
        </div>
    }
}
