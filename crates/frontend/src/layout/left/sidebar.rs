//! Sidebar: permitted views, connection status and the signed-in user.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::backend::transport;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::access::visible_views;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let views = move || {
        session
            .user
            .with(|user| user.as_ref().map(visible_views).unwrap_or_default())
    };
    let transport = transport();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("package")}
                <span>"Return FMS"</span>
            </div>

            <nav class="app-sidebar__menu">
                {move || {
                    let items = views();
                    if items.is_empty() {
                        return view! {
                            <div class="app-sidebar__empty">"No modules are enabled for your account."</div>
                        }.into_any();
                    }
                    items.into_iter().map(|view_id| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active_view.get() == view_id
                                on:click=move |_| ctx.set_view(view_id)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(view_id.icon_name())}
                                    <span>{view_id.menu_label()}</span>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </nav>

            <div class="app-sidebar__footer">
                <div
                    class="app-sidebar__status"
                    class:app-sidebar__status--live=transport.is_live()
                >
                    <span class="app-sidebar__status-dot"></span>
                    {format!("{} connection", transport.label())}
                </div>
                {move || session.user.get().map(|user| {
                    let initial = user.initial();
                    view! {
                        <div class="app-sidebar__user">
                            <div class="app-sidebar__avatar">{initial}</div>
                            <div class="app-sidebar__user-info">
                                <span class="app-sidebar__user-name">{user.name}</span>
                                <span class="app-sidebar__user-id">{user.id}</span>
                            </div>
                            <button
                                class="button button--ghost"
                                aria-label="Sign out"
                                on:click=move |_| {
                                    log::info!("signing out");
                                    session.sign_out();
                                }
                            >
                                {icon("log-out")}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
