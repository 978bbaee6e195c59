use crate::dashboards::d400_return_stats::ui::ReturnStatsDashboard;
use crate::domain::a001_material_return::ui::list::WorkflowTable;
use crate::domain::a002_transporter_payment::ui::list::PaymentTable;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::enums::ViewId;
use leptos::prelude::*;
use thaw::*;

/// Content of the active view, with the load/error/permission states around it
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();

    let permitted = move || {
        let view = ctx.active_view.get();
        session
            .user
            .with(|u| u.as_ref().map(|u| u.has_capability(view)).unwrap_or(false))
    };

    view! {
        <div data-zone="center" class="app-content">
            {move || ctx.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert-triangle")}</span>
                    <span class="warning-box__text">{e}</span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.refresh()>
                        "Retry"
                    </Button>
                </div>
            })}

            {move || {
                if !permitted() {
                    return view! {
                        <div class="empty-state">
                            {icon("lock")}
                            <h3>"Access Restricted"</h3>
                            <p>"You don't have permission to view this section."</p>
                        </div>
                    }.into_any();
                }
                if !ctx.loaded.get() && ctx.loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                            <Spinner />
                            <span>"Loading data from server..."</span>
                        </Flex>
                    }.into_any();
                }
                match ctx.active_view.get() {
                    ViewId::Dashboard => view! { <ReturnStatsDashboard /> }.into_any(),
                    ViewId::Kitting => view! { <PaymentTable /> }.into_any(),
                    view_id => view! { <WorkflowTable view_id=view_id /> }.into_any(),
                }
            }}
        </div>
    }
}
