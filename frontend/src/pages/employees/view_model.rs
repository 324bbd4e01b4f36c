use super::{
    repository::EmployeesRepository,
    utils::{
        EmployeeField, EmployeeFormState, FieldErrors, DELETE_ERROR_FALLBACK,
        SAVE_ERROR_FALLBACK,
    },
};
use crate::{
    api::{ApiClient, ApiError, Employee, EmployeePayload, Tag},
    state::{
        cache::{use_query_cache, QueryCache},
        modal::ModalState,
    },
};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeSubmission {
    Create(EmployeePayload),
    Update { id: i64, payload: EmployeePayload },
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub form: RwSignal<EmployeeFormState>,
    pub field_errors: RwSignal<FieldErrors>,
    pub modal: RwSignal<ModalState<Employee>>,
    pub save_action: Action<EmployeeSubmission, Result<Employee, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

impl EmployeesViewModel {
    pub fn new_with(client: ApiClient, cache: QueryCache) -> Self {
        let repository = EmployeesRepository::new_with_client(client, cache);

        let form = create_rw_signal(EmployeeFormState::default());
        let field_errors = create_rw_signal(FieldErrors::new());
        let modal = create_rw_signal(ModalState::<Employee>::Closed);

        let repo_for_resource = repository.clone();
        let employees_resource = create_resource(
            move || cache.generation(Tag::Employees),
            move |_generation| {
                let repo = repo_for_resource.clone();
                async move { repo.fetch_employees().await }
            },
        );

        let repo_for_save = repository.clone();
        let save_action = create_action(move |submission: &EmployeeSubmission| {
            let repo = repo_for_save.clone();
            let submission = submission.clone();
            async move {
                let result = match submission {
                    EmployeeSubmission::Create(payload) => repo.create_employee(payload).await,
                    EmployeeSubmission::Update { id, payload } => {
                        repo.update_employee(id, payload).await
                    }
                };
                match &result {
                    Ok(_) => {
                        modal.update(|state| state.succeed());
                        form.set(EmployeeFormState::default());
                        field_errors.set(FieldErrors::new());
                    }
                    Err(err) => {
                        log::warn!("saving employee failed: {}", err);
                        modal.update(|state| state.fail(err.message_or(SAVE_ERROR_FALLBACK)));
                    }
                }
                result
            }
        });

        let repo_for_delete = repository;
        let delete_action = create_action(move |id: &i64| {
            let repo = repo_for_delete.clone();
            let id = *id;
            async move {
                let result = repo.delete_employee(id).await;
                match &result {
                    Ok(()) => modal.update(|state| state.succeed()),
                    Err(err) => {
                        log::warn!("deleting employee {} failed: {}", id, err);
                        modal.update(|state| state.fail(err.message_or(DELETE_ERROR_FALLBACK)));
                    }
                }
                result
            }
        });

        Self {
            employees_resource,
            form,
            field_errors,
            modal,
            save_action,
            delete_action,
        }
    }

    pub fn open_add(&self) {
        let mut opened = false;
        self.modal.update(|state| opened = state.open_add());
        if opened {
            self.form.set(EmployeeFormState::default());
            self.field_errors.set(FieldErrors::new());
        }
    }

    pub fn open_edit(&self, employee: Employee) {
        let prefill = EmployeeFormState::from_employee(&employee);
        let mut opened = false;
        self.modal.update(|state| opened = state.open_edit(employee));
        if opened {
            self.form.set(prefill);
            self.field_errors.set(FieldErrors::new());
        }
    }

    pub fn open_delete(&self, employee: Employee) {
        self.modal.update(|state| {
            state.open_delete(employee);
        });
    }

    pub fn cancel(&self) {
        self.modal.update(|state| {
            state.cancel();
        });
    }

    pub fn set_field(&self, field: EmployeeField, value: String) {
        self.form.update(|form| form.set_field(field, value));
        self.field_errors.update(|errors| {
            errors.remove(&field);
        });
    }

    /// Validates and dispatches the open add/edit form. Returns whether a
    /// request was sent.
    pub fn submit(&self) -> bool {
        if !self.modal.with_untracked(|state| state.is_form_open()) {
            return false;
        }
        self.modal.update(|state| state.clear_error());
        let payload = match self.form.with_untracked(|form| form.to_payload()) {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors.set(errors);
                return false;
            }
        };
        self.field_errors.set(FieldErrors::new());

        let mut submission = None;
        self.modal.update(|state| {
            if state.begin_request() {
                submission = Some(match state.target() {
                    Some(employee) => EmployeeSubmission::Update {
                        id: employee.id,
                        payload,
                    },
                    None => EmployeeSubmission::Create(payload),
                });
            }
        });
        match submission {
            Some(submission) => {
                self.save_action.dispatch(submission);
                true
            }
            None => false,
        }
    }

    pub fn confirm_delete(&self) -> bool {
        let mut target = None;
        self.modal.update(|state| {
            if state.is_confirming_delete() && state.begin_request() {
                target = state.target().map(|employee| employee.id);
            }
        });
        match target {
            Some(id) => {
                self.delete_action.dispatch(id);
                true
            }
            None => false,
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    EmployeesViewModel::new_with(api, use_query_cache())
}
