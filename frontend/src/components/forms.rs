use crate::api::AttendanceStatus;
use leptos::*;

const INPUT_CLASS: &str = "mt-1 w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 disabled:bg-surface-muted disabled:text-fg-muted";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT_CLASS} border-status-error-border focus:ring-status-error-border")
    } else {
        format!("{INPUT_CLASS} border-border focus:ring-action-primary-bg")
    }
}

/// Labelled text input with a per-field error line underneath.
#[component]
pub fn TextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_id = format!("field-{}", name);
    view! {
        <div>
            <label for=input_id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=input_id
                name=name
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder.unwrap_or_default()
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="mt-1 text-sm text-status-error-text">{message}</p>
            })}
        </div>
    }
}

#[component]
pub fn DatePicker(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] max: MaybeSignal<Option<String>>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let class_error = error.clone();
    view! {
        <div>
            <label class="block text-sm font-medium text-fg">{label}</label>
            <input
                type="date"
                class=move || input_class(class_error.get().is_some())
                max=move || max.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="mt-1 text-sm text-status-error-text">{message}</p>
            })}
        </div>
    }
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Present => {
            "px-3 py-1 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "px-3 py-1 rounded-full text-xs font-medium bg-status-error-bg text-status-error-text"
        }
    };
    view! { <span class=class>{status.as_str()}</span> }
}
