use crate::api::ApiError;
use leptos::*;

/// Inline banner for a failed request: the server's detail when it sent one,
/// `fallback` otherwise.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(into)] fallback: String,
) -> impl IntoView {
    let fallback = store_value(fallback);
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || {
                        error
                            .get()
                            .map(|e| fallback.with_value(|text| e.message_or(text)))
                            .unwrap_or_default()
                    }}
                </div>
                {move || error.get().map(|e| {
                    if e.has_server_detail() || e.code.is_empty() {
                        ().into_view()
                    } else {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    }
                })}
            </div>
        </Show>
    }
}
