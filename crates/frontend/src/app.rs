//! Root components
//!
//! - `App` provides the session and shows either the login page or the main layout
//! - `MainLayout` owns the data store, the refresh timer and URL sync

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::{use_session, SessionContext};
use crate::system::pages::login::LoginPage;
use contracts::system::access::resolve_active_view;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    ctx.init_url_sync();

    // keep the active view within the user's permissions
    Effect::new(move |_| {
        let current = ctx.active_view.get();
        let resolved = session
            .user
            .with(|u| u.as_ref().and_then(|u| resolve_active_view(u, current)));
        if let Some(view) = resolved {
            if view != current {
                log::info!("view {} not permitted, switching to {}", current, view);
                ctx.active_view.set(view);
            }
        }
    });

    ctx.refresh();
    ctx.start_auto_refresh();

    on_cleanup(|| log::debug!("main layout disposed"));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::restore();
    provide_context(session);

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
