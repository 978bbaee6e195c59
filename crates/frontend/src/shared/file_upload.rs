use crate::shared::backend;
use crate::shared::icons::icon;
use crate::shared::notify::alert;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// Reads a picked file into a `data:<mime>;base64,...` URL
pub async fn read_as_data_url(file: &File) -> Result<String, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Transport(format!("File read failed: {:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Document picker that uploads immediately and reports the stored URL.
#[component]
pub fn FileUpload(
    label: &'static str,
    #[prop(into)] on_upload: Callback<String>,
    #[prop(optional)] accept: Option<&'static str>,
) -> impl IntoView {
    let (uploading, set_uploading) = signal(false);
    let (uploaded_name, set_uploaded_name) = signal(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading.set(true);
        set_uploaded_name.set(None);
        spawn_local(async move {
            let name = file.name();
            let result = match read_as_data_url(&file).await {
                Ok(data_url) => backend::upload(data_url, name.clone()).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(url) => {
                    log::info!("uploaded {} -> {}", name, url);
                    set_uploaded_name.set(Some(name));
                    on_upload.run(url);
                }
                Err(e) => {
                    log::error!("upload of {} failed: {}", name, e);
                    alert(&format!("File upload failed: {}", e));
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <label
                class="file-upload"
                class:file-upload--busy=move || uploading.get()
                class:file-upload--done=move || uploaded_name.get().is_some()
            >
                <input
                    type="file"
                    class="file-upload__input"
                    accept=accept.unwrap_or("image/*,application/pdf")
                    disabled=move || uploading.get()
                    on:change=on_change
                />
                {move || {
                    if uploading.get() {
                        view! { <span class="file-upload__text">"Uploading..."</span> }.into_any()
                    } else if let Some(name) = uploaded_name.get() {
                        view! {
                            <span class="file-upload__text">{icon("check-circle")}{name}</span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="file-upload__text">{icon("upload")}"Choose file"</span>
                        }.into_any()
                    }
                }}
            </label>
        </div>
    }
}
