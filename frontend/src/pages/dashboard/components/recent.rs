use crate::{
    components::forms::StatusBadge, state::roster::AttendanceRow, utils::time::format_date,
};
use leptos::*;

#[component]
pub fn RecentAttendance(#[prop(into)] rows: Signal<Vec<AttendanceRow>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-2xl shadow-sm border border-border overflow-hidden">
            <div class="p-6 border-b border-border">
                <h2 class="text-lg font-semibold text-fg">"Recent Attendance"</h2>
            </div>
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="p-10 text-center text-fg-muted">"No attendance records available."</div>
                }
            >
                <table class="w-full text-left">
                    <thead class="bg-surface-muted text-fg-muted text-sm uppercase">
                        <tr>
                            <th class="px-6 py-4">"Employee"</th>
                            <th class="px-6 py-4">"Date"</th>
                            <th class="px-6 py-4">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr>
                                <td class="px-6 py-4 font-medium text-fg">{row.employee_name}</td>
                                <td class="px-6 py-4 text-fg-muted">{format_date(row.record.date)}</td>
                                <td class="px-6 py-4"><StatusBadge status=row.record.status /></td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
