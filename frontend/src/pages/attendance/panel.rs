use super::{
    components::{
        form::AttendanceFormModal,
        summary::{AttendanceFilter, AttendanceSummaryBar},
        table::AttendanceTable,
    },
    utils::{delete_prompt, EMPLOYEES_ERROR_FALLBACK, LOAD_ERROR_FALLBACK},
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, PageHeader},
    },
    state::{modal::ModalState, roster::AttendanceRow},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    view! {
        <Title text="Attendance | HR Desk" />
        <Layout>
            <AttendanceContent vm=vm />
        </Layout>
    }
}

#[component]
pub fn AttendanceContent(vm: AttendanceViewModel) -> impl IntoView {
    view! {
        <Show
            when=move || !vm.has_no_employees()
            fallback=|| view! {
                <EmptyState
                    title="No Employees Found"
                    description="Please add employees before marking attendance."
                    icon="fa-user-slash"
                />
            }
        >
            <AttendanceWorkspace vm=vm />
        </Show>
    }
}

#[component]
fn AttendanceWorkspace(vm: AttendanceViewModel) -> impl IntoView {
    let employees_resource = vm.employees_resource;
    let attendance_resource = vm.attendance_resource;
    let modal = vm.modal;
    let rows = vm.rows;

    let employees = Signal::derive(move || match employees_resource.get() {
        Some(Ok(list)) => list,
        _ => Vec::<Employee>::new(),
    });
    let employees_error = Signal::derive(move || employees_resource.get().and_then(Result::err));
    let attendance_error =
        Signal::derive(move || attendance_resource.get().and_then(Result::err));
    let loading = Signal::derive(move || {
        attendance_resource.loading().get() || employees_resource.loading().get()
    });
    let summary = Signal::derive(move || vm.summary());
    let filter_value = Signal::derive(move || vm.filter.get());

    let delete_open = Signal::derive(move || modal.with(ModalState::is_confirming_delete));
    let delete_message = Signal::derive(move || {
        modal
            .with(|state| {
                state
                    .target()
                    .filter(|_| state.is_confirming_delete())
                    .map(delete_prompt)
            })
            .unwrap_or_default()
    });
    let delete_error = Signal::derive(move || {
        modal.with(|state| state.error().filter(|_| state.is_confirming_delete()))
    });
    let delete_pending = vm.delete_action.pending();

    let mark_button = view! {
        <button
            type="button"
            class="inline-flex items-center gap-2 px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            on:click=move |_| vm.open_add()
        >
            "+ Mark Attendance"
        </button>
    }
    .into_view();

    view! {
        <PageHeader
            title="Attendance Management"
            description="Track and manage employee attendance records."
            action=mark_button
        />
        <div class="space-y-6">
            <InlineErrorMessage error=employees_error fallback=EMPLOYEES_ERROR_FALLBACK />
            <InlineErrorMessage error=attendance_error fallback=LOAD_ERROR_FALLBACK />
            <div class="flex flex-col gap-4 lg:flex-row lg:items-end lg:justify-between">
                <AttendanceFilter
                    value=filter_value
                    on_change=Callback::new(move |value: String| vm.set_filter(value))
                />
                <div class="lg:w-2/3">
                    <AttendanceSummaryBar summary=summary />
                </div>
            </div>
            <AttendanceTable
                rows=rows
                loading=loading
                on_edit=Callback::new(move |row: AttendanceRow| vm.open_edit(row))
                on_delete=Callback::new(move |row: AttendanceRow| vm.open_delete(row))
                delete_pending=delete_pending
            />
        </div>
        <AttendanceFormModal vm=vm employees=employees />
        <ConfirmDialog
            is_open=delete_open
            title="Confirm Delete"
            message=delete_message
            confirm_label="Delete"
            on_confirm=Callback::new(move |_| {
                vm.confirm_delete();
            })
            on_cancel=Callback::new(move |_| vm.cancel())
            pending=delete_pending
            error=delete_error
            destructive=true
        />
    }
}
