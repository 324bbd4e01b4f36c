use super::{
    components::{form::EmployeeFormModal, table::EmployeeTable},
    utils::{delete_prompt, LOAD_ERROR_FALLBACK},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{Layout, PageHeader},
    },
    state::modal::ModalState,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    view! {
        <Title text="Employees | HR Desk" />
        <Layout>
            <EmployeesContent vm=vm />
        </Layout>
    }
}

#[component]
pub fn EmployeesContent(vm: EmployeesViewModel) -> impl IntoView {
    let resource = vm.employees_resource;
    let modal = vm.modal;

    // Keep the last good list on screen while a refetch is running.
    let employees = create_memo(move |previous: Option<&Vec<Employee>>| {
        match resource.get() {
            Some(Ok(list)) => list,
            _ => previous.cloned().unwrap_or_default(),
        }
    });
    let load_error = Signal::derive(move || resource.get().and_then(Result::err));
    let loading = Signal::derive(move || resource.loading().get());

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

    let add_button = view! {
        <button
            type="button"
            class="inline-flex items-center gap-2 px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            on:click=move |_| vm.open_add()
        >
            "+ Add Employee"
        </button>
    }
    .into_view();

    view! {
        <PageHeader
            title="Employee Management"
            description="Manage employee records"
            action=add_button
        />
        <InlineErrorMessage error=load_error fallback=LOAD_ERROR_FALLBACK />
        <EmployeeTable
            employees=employees
            loading=loading
            on_edit=Callback::new(move |employee: Employee| vm.open_edit(employee))
            on_delete=Callback::new(move |employee: Employee| vm.open_delete(employee))
            delete_pending=delete_pending
        />
        <EmployeeFormModal vm=vm />
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
