use crate::{
    components::{forms::StatusBadge, layout::LoadingSpinner},
    state::roster::AttendanceRow,
    utils::time::format_date,
};
use leptos::*;

const HEADER_CELL: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";

#[component]
pub fn AttendanceTable(
    #[prop(into)] rows: Signal<Vec<AttendanceRow>>,
    #[prop(into)] loading: Signal<bool>,
    on_edit: Callback<AttendanceRow>,
    on_delete: Callback<AttendanceRow>,
    #[prop(optional, into)] delete_pending: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <Show when=move || loading.get() && rows.with(Vec::is_empty)>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && rows.with(Vec::is_empty)>
                <p class="p-6 text-center text-fg-muted">"No attendance records found."</p>
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>"Employee"</th>
                            <th class=HEADER_CELL>"Date"</th>
                            <th class=HEADER_CELL>"Status"</th>
                            <th class=format!("{HEADER_CELL} text-right")>"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || rows.get().into_iter().map(|row| {
                            let for_edit = row.clone();
                            let for_delete = row.clone();
                            view! {
                                <tr>
                                    <td class="px-6 py-4 font-medium text-fg">{row.employee_name.clone()}</td>
                                    <td class="px-6 py-4 text-fg">{format_date(row.record.date)}</td>
                                    <td class="px-6 py-4"><StatusBadge status=row.record.status /></td>
                                    <td class="px-6 py-4 text-right space-x-3">
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| on_edit.call(for_edit.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            class="text-action-danger-bg hover:underline disabled:opacity-50"
                                            disabled=move || delete_pending.get()
                                            on:click=move |_| on_delete.call(for_delete.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
