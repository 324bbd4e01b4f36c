use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };

    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    });
    let cancel_label_text = Signal::derive(move || {
        let text = cancel_label.get();
        if text.trim().is_empty() {
            "Cancel".to_string()
        } else {
            text
        }
    });
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let error_text = Signal::derive(move || error.get());

    let cancel_unless_pending = move || {
        if !pending.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel_unless_pending()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel_unless_pending();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    {move || error_text.get().map(|text| view! {
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-3 py-2 rounded text-sm">
                            {text}
                        </div>
                    })}
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| cancel_unless_pending()
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            <Show when=move || pending.get()>
                                <span class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></span>
                            </Show>
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
