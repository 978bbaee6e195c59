pub mod center;
pub mod global_context;
pub mod header;
pub mod left;
pub mod modal_host;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |           Header             |
/// |  Sidebar  +------------------------------+
/// |           |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside data-zone="left" class="app-sidebar">
                {left()}
            </aside>
            <div class="app-main">
                <header::Header />
                {center()}
            </div>
            <modal_host::ModalHost />
        </div>
    }
}
