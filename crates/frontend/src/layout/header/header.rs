use crate::layout::global_context::{ActiveModal, AppGlobalContext};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::access::can_create_entry;
use leptos::prelude::*;
use thaw::*;

/// Title bar of the active view with refresh and "New Entry" actions
#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();

    let show_new_entry = move || {
        let view = ctx.active_view.get();
        session
            .user
            .with(|u| u.as_ref().map(|u| can_create_entry(u, view)).unwrap_or(false))
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {move || icon(ctx.active_view.get().icon_name())}
                <h1 class="header__title">{move || ctx.active_view.get().title()}</h1>
            </div>
            <div class="header__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.refresh()
                    disabled=Signal::derive(move || ctx.loading.get())
                >
                    {icon("refresh")}
                    {move || if ctx.loading.get() { " Refreshing..." } else { " Refresh" }}
                </Button>
                <Show when=show_new_entry>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_modal(ActiveModal::NewEntry)
                    >
                        {icon("plus")}
                        " New Entry"
                    </Button>
                </Show>
            </div>
        </header>
    }
}
