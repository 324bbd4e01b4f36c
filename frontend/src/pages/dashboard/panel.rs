use super::{
    components::{RecentAttendance, StatsGrid},
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, PageHeader},
    },
    pages::{attendance, employees},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! {
        <Title text="Dashboard | HR Desk" />
        <Layout>
            <DashboardContent vm=vm />
        </Layout>
    }
}

#[component]
pub fn DashboardContent(vm: DashboardViewModel) -> impl IntoView {
    let stats = vm.stats;
    let loading = vm.loading;
    let employees_error = Signal::derive(move || vm.employees_error());
    let attendance_error = Signal::derive(move || vm.attendance_error());
    let recent = Signal::derive(move || stats.with(|s| s.recent.clone()));

    view! {
        <PageHeader
            title="Dashboard Overview"
            description="Summary of employees and today\u{2019}s attendance performance."
        />
        <div class="space-y-10">
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <InlineErrorMessage
                error=employees_error
                fallback=employees::utils::LOAD_ERROR_FALLBACK
            />
            <InlineErrorMessage
                error=attendance_error
                fallback=attendance::utils::LOAD_ERROR_FALLBACK
            />
            <StatsGrid stats=stats />
            <RecentAttendance rows=recent />
        </div>
    }
}
