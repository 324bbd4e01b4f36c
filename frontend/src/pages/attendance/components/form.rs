use crate::{
    api::{AttendanceStatus, Employee},
    components::{forms::DatePicker, modal::FormModal},
    pages::attendance::{utils::AttendanceField, view_model::AttendanceViewModel},
    state::modal::ModalState,
    utils::time::{format_date, today_in_app_tz},
};
use leptos::{ev, *};

#[component]
pub fn AttendanceFormModal(
    vm: AttendanceViewModel,
    #[prop(into)] employees: Signal<Vec<Employee>>,
) -> impl IntoView {
    let modal = vm.modal;
    let form = vm.form;
    let field_errors = vm.field_errors;

    let is_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let is_editing = Signal::derive(move || modal.with(ModalState::is_editing));
    let in_flight = Signal::derive(move || modal.with(ModalState::in_flight));
    let title = Signal::derive(move || {
        if is_editing.get() {
            "Edit Attendance".to_string()
        } else {
            "Mark Attendance".to_string()
        }
    });
    let banner = Signal::derive(move || modal.with(ModalState::error));
    let employee_error =
        Signal::derive(move || field_errors.with(|errors| errors.get(&AttendanceField::Employee).cloned()));
    let date_error =
        Signal::derive(move || field_errors.with(|errors| errors.get(&AttendanceField::Date).cloned()));
    let date_value = Signal::derive(move || form.with(|state| state.date.clone()));
    let max_date = Signal::derive(move || Some(format_date(today_in_app_tz())));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <FormModal is_open=is_open title=title error=banner>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg" for="attendance-employee">
                        "Employee"
                    </label>
                    <select
                        id="attendance-employee"
                        name="employee_id"
                        class="mt-1 w-full border border-border rounded-lg px-3 py-2"
                        prop:value=move || form.with(|state| state.employee_id.clone())
                        on:change=move |ev| vm.select_employee(event_target_value(&ev))
                    >
                        <option value="">"Select Employee"</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee| {
                                let id = employee.id.to_string();
                                let selected_id = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || {
                                            form.with(|state| state.employee_id == selected_id)
                                        }
                                    >
                                        {employee.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                    {move || employee_error.get().map(|message| view! {
                        <p class="mt-1 text-sm text-status-error-text">{message}</p>
                    })}
                </div>
                <DatePicker
                    label="Date"
                    value=date_value
                    on_input=Callback::new(move |value: String| vm.set_date(value))
                    max=max_date
                    error=date_error
                />
                <div>
                    <label class="block text-sm font-medium text-fg" for="attendance-status">
                        "Status"
                    </label>
                    <select
                        id="attendance-status"
                        name="status"
                        class="mt-1 w-full border border-border rounded-lg px-3 py-2"
                        prop:value=move || form.with(|state| state.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                vm.set_status(status);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || form.with(|state| state.status == status)
                                    >
                                        {status.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
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
                            (false, false) => "Mark",
                        }}
                    </button>
                </div>
            </form>
        </FormModal>
    }
}
