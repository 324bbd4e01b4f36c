use crate::{
    api::Employee,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::employees::utils::display_salary,
};
use leptos::*;

const HEADER_CELL: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] loading: Signal<bool>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
    #[prop(optional, into)] delete_pending: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && employees.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || !employees.with(Vec::is_empty)
                fallback=|| view! {
                    <EmptyState
                        title="No Employees Found"
                        description="Click \u{201c}Add Employee\u{201d} to create your first employee."
                        icon="fa-users"
                    />
                }
            >
                <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=HEADER_CELL>"Employee ID"</th>
                                <th class=HEADER_CELL>"Name"</th>
                                <th class=HEADER_CELL>"Email"</th>
                                <th class=HEADER_CELL>"Department"</th>
                                <th class=HEADER_CELL>"Role"</th>
                                <th class=HEADER_CELL>"Salary"</th>
                                <th class=HEADER_CELL>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {move || employees.get().into_iter().map(|employee| {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                view! {
                                    <tr>
                                        <td class=CELL>{employee.employee_id.clone()}</td>
                                        <td class=CELL>{employee.name.clone()}</td>
                                        <td class=CELL>{employee.email.clone()}</td>
                                        <td class=CELL>{employee.department.clone()}</td>
                                        <td class=CELL>{employee.role.clone()}</td>
                                        <td class=CELL>{display_salary(employee.salary)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
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
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn table_lists_each_employee_with_formatted_salary() {
        let html = render_to_string(move || {
            let employees = vec![
                employee(1, "EMP001", "Alice Example"),
                employee(2, "EMP002", "Bob Builder"),
            ];
            view! {
                <EmployeeTable
                    employees=Signal::derive(move || employees.clone())
                    loading=Signal::derive(|| false)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Alice Example"));
        assert!(html.contains("EMP002"));
        assert!(html.contains("$50,000"));
        assert!(html.contains("Edit"));
        assert!(!html.contains("No Employees Found"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(move || {
            view! {
                <EmployeeTable
                    employees=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No Employees Found"));
        assert!(!html.contains("<table"));
    }
}
