use crate::{components::forms::DatePicker, pages::attendance::utils::AttendanceSummary};
use leptos::*;

#[component]
pub fn AttendanceSummaryBar(#[prop(into)] summary: Signal<AttendanceSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <SummaryTile label="Total Records" value=Signal::derive(move || summary.get().total) />
            <SummaryTile label="Present" value=Signal::derive(move || summary.get().present) />
            <SummaryTile label="Absent" value=Signal::derive(move || summary.get().absent()) />
        </div>
    }
}

#[component]
fn SummaryTile(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-semibold uppercase tracking-wider text-fg-muted">{label}</p>
            <p class="mt-2 text-2xl font-bold text-fg">{move || value.get()}</p>
        </div>
    }
}

/// Date filter over the attendance list. Blank shows every date.
#[component]
pub fn AttendanceFilter(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-end gap-3">
            <div class="w-48">
                <DatePicker label="Filter by date" value=value on_input=on_change />
            </div>
            <button
                type="button"
                class="px-3 py-2 text-sm rounded-md bg-surface-muted text-fg"
                on:click=move |_| on_change.call(String::new())
            >
                "Show all"
            </button>
        </div>
    }
}
