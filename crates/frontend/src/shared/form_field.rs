use leptos::prelude::*;

/// Labelled text input bound to one `String` field of a form signal.
///
/// `get`/`set` select the field, so one signal can back a whole form.
pub fn text_field<T>(
    form: RwSignal<T>,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    get: fn(&T) -> &String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Read-only "label: value" line used in record summaries
pub fn summary_item(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="summary__item">
            <span class="summary__label">{label}</span>
            <span class="summary__value">{value}</span>
        </div>
    }
}
