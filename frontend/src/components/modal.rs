use leptos::*;

/// Overlay shell for add/edit forms. The form itself is the child.
#[component]
pub fn FormModal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
                <div
                    class="w-full max-w-lg rounded-2xl bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-xl font-semibold text-fg">{let title = title.clone(); move || title.get()}</h2>
                    {let error = error.clone(); move || error.get().map(|text| view! {
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-3 py-2 rounded text-sm">
                            {text}
                        </div>
                    })}
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
