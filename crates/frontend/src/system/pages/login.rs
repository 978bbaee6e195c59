use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::backend::transport;
use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let user_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let id_val = user_id.get_untracked();
        let password_val = password.get_untracked();
        spawn_local(async move {
            let result = do_login(id_val, password_val).await;
            set_is_loading.set(false);
            match result {
                Ok(user) => {
                    log::info!("logged in as {}", user.id);
                    // unmounts this page
                    session.sign_in(user);
                }
                Err(failure) => set_error_message.set(Some(failure.message())),
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Material Return FMS"</h1>
                <h2>"Sign in to access your workspace"</h2>

                <Show when=move || error_message.get().is_some()>
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>
                            <strong>"Authentication Failed. "</strong>
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </MessageBar>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"User ID"</Label>
                        <Input
                            value=user_id
                            placeholder="Enter your user ID"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            placeholder="Enter your password"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="login-info">
                    {format!("Connection: {}", transport().label())}
                </p>
            </div>
        </div>
    }
}
