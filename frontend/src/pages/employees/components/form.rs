use crate::{
    components::{forms::TextField, modal::FormModal},
    pages::employees::{
        utils::{EmployeeField, EmployeeFormState, FieldErrors},
        view_model::EmployeesViewModel,
    },
    state::modal::ModalState,
};
use leptos::{ev, *};

#[component]
pub fn EmployeeFormModal(vm: EmployeesViewModel) -> impl IntoView {
    let modal = vm.modal;
    let is_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let is_editing = Signal::derive(move || modal.with(ModalState::is_editing));
    let in_flight = Signal::derive(move || modal.with(ModalState::in_flight));
    let title = Signal::derive(move || {
        if is_editing.get() {
            "Edit Employee".to_string()
        } else {
            "Add New Employee".to_string()
        }
    });
    let banner = Signal::derive(move || modal.with(ModalState::error));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <FormModal is_open=is_open title=title error=banner>
            <form class="space-y-4" on:submit=on_submit>
                {EmployeeField::ALL
                    .into_iter()
                    .map(|field| {
                        view! { <EmployeeInput vm=vm field=field /> }
                    })
                    .collect_view()}
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md bg-surface-muted text-fg disabled:opacity-50"
                        disabled=move || in_flight.get()
                        on:click=move |_| vm.cancel()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || in_flight.get()
                    >
                        {move || match (in_flight.get(), is_editing.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Update",
                            (false, false) => "Save",
                        }}
                    </button>
                </div>
            </form>
        </FormModal>
    }
}

#[component]
fn EmployeeInput(vm: EmployeesViewModel, field: EmployeeField) -> impl IntoView {
    let form = vm.form;
    let field_errors = vm.field_errors;
    let modal = vm.modal;
    let value = Signal::derive(move || {
        form.with(|state: &EmployeeFormState| state.field(field).to_string())
    });
    let error = Signal::derive(move || {
        field_errors.with(|errors: &FieldErrors| errors.get(&field).cloned())
    });
    // The employee code is the record's identity and stays fixed once created.
    let disabled = Signal::derive(move || {
        field == EmployeeField::EmployeeId && modal.with(ModalState::is_editing)
    });

    view! {
        <TextField
            name=field.as_str()
            label=field.label()
            value=value
            on_input=Callback::new(move |text: String| vm.set_field(field, text))
            error=error
            input_type=field.input_type()
            placeholder=field.placeholder()
            disabled=disabled
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::ApiClient,
        state::cache::QueryCache,
        test_support::{
            helpers::{employee, has_disabled_attribute},
            ssr::render_to_string,
        },
    };

    fn view_model() -> EmployeesViewModel {
        EmployeesViewModel::new_with(
            ApiClient::new_with_base_url("http://127.0.0.1:9/api"),
            QueryCache::new(),
        )
    }

    #[test]
    fn add_modal_renders_all_fields_and_save() {
        let html = render_to_string(move || {
            let vm = view_model();
            vm.open_add();
            view! { <EmployeeFormModal vm=vm /> }
        });
        assert!(html.contains("Add New Employee"));
        for field in EmployeeField::ALL {
            assert!(html.contains(field.label()));
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Save"));
    }

    #[test]
    fn edit_modal_locks_employee_code_and_shows_update() {
        let html = render_to_string(move || {
            let vm = view_model();
            vm.open_edit(employee(4, "EMP004", "Dana"));
            view! { <EmployeeFormModal vm=vm /> }
        });
        assert!(html.contains("Edit Employee"));
        assert!(html.contains("Update"));
        assert!(has_disabled_attribute(&html));
    }

    #[test]
    fn submit_errors_render_under_fields() {
        let html = render_to_string(move || {
            let vm = view_model();
            vm.open_add();
            vm.submit();
            view! { <EmployeeFormModal vm=vm /> }
        });
        assert!(html.contains("Employee ID is required"));
        assert!(html.contains("Salary is required"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || view! { <EmployeeFormModal vm=view_model() /> });
        assert!(!html.contains("Add New Employee"));
    }
}
