use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus a titled dialog surface.
///
/// Closes on the ✕ button or on a click that both starts and ends on the
/// overlay, so selecting text inside the dialog never dismisses it.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    on_close: Callback<()>,
    /// Extra class for the dialog surface
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // the overlay must not be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <div>
                        <h2 class="modal__title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="modal__subtitle">{s}</p> })}
                    </div>
                    <button class="button button--ghost" aria-label="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
