use crate::pages::dashboard::utils::DashboardStats;
use leptos::*;

#[component]
pub fn StatsGrid(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 md:grid-cols-4">
            <StatCard
                title="Total Employees"
                value=Signal::derive(move || stats.with(|s| s.total_employees.to_string()))
            />
            <StatCard
                title="Today's Records"
                value=Signal::derive(move || stats.with(|s| s.todays_records.to_string()))
            />
            <StatCard
                title="Today's Present"
                value=Signal::derive(move || stats.with(|s| s.todays_present.to_string()))
            />
            <StatCard
                title="Today's Attendance Rate"
                value=Signal::derive(move || stats.with(DashboardStats::rate_label))
            />
        </div>
    }
}

#[component]
pub fn StatCard(title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm hover:shadow-md transition">
            <p class="text-sm text-fg-muted">{title}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{move || value.get()}</p>
        </div>
    }
}
