use super::{
    repository::AttendanceRepository,
    utils::{
        filter_date, AttendanceErrors, AttendanceField, AttendanceFormState, AttendanceSummary,
        DELETE_ERROR_FALLBACK, SAVE_ERROR_FALLBACK,
    },
};
use crate::{
    api::{
        ApiClient, ApiError, AttendancePayload, AttendanceRecord, AttendanceStatus, Employee, Tag,
    },
    state::{
        cache::{use_query_cache, QueryCache},
        modal::ModalState,
        roster::{AttendanceRow, EmployeeDirectory},
    },
    utils::time::today_in_app_tz,
};
use chrono::NaiveDate;
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceSubmission {
    Mark(AttendancePayload),
    Update { id: i64, payload: AttendancePayload },
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub attendance_resource:
        Resource<(u32, Option<NaiveDate>), Result<Vec<AttendanceRecord>, ApiError>>,
    pub filter: RwSignal<String>,
    pub directory: Memo<EmployeeDirectory>,
    pub rows: Memo<Vec<AttendanceRow>>,
    pub form: RwSignal<AttendanceFormState>,
    pub field_errors: RwSignal<AttendanceErrors>,
    pub modal: RwSignal<ModalState<AttendanceRow>>,
    pub save_action: Action<AttendanceSubmission, Result<AttendanceRecord, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

impl AttendanceViewModel {
    pub fn new_with(client: ApiClient, cache: QueryCache) -> Self {
        let repository = AttendanceRepository::new_with_client(client, cache);

        let filter = create_rw_signal(String::new());
        let form = create_rw_signal(AttendanceFormState::default());
        let field_errors = create_rw_signal(AttendanceErrors::new());
        let modal = create_rw_signal(ModalState::<AttendanceRow>::Closed);

        let repo_for_employees = repository.clone();
        let employees_resource = create_resource(
            move || cache.generation(Tag::Employees),
            move |_generation| {
                let repo = repo_for_employees.clone();
                async move { repo.fetch_employees().await }
            },
        );

        let repo_for_attendance = repository.clone();
        let attendance_resource = create_resource(
            move || {
                (
                    cache.generation(Tag::Attendance),
                    filter.with(|value| filter_date(value)),
                )
            },
            move |(_generation, date)| {
                let repo = repo_for_attendance.clone();
                async move { repo.fetch_attendance(date).await }
            },
        );

        let directory = create_memo(move |previous: Option<&EmployeeDirectory>| {
            match employees_resource.get() {
                Some(Ok(employees)) => EmployeeDirectory::from_employees(&employees),
                _ => previous.cloned().unwrap_or_default(),
            }
        });

        let rows = create_memo(move |previous: Option<&Vec<AttendanceRow>>| {
            match attendance_resource.get() {
                Some(Ok(records)) => directory.with(|directory| directory.join_known(&records)),
                _ => previous.cloned().unwrap_or_default(),
            }
        });

        let repo_for_save = repository.clone();
        let save_action = create_action(move |submission: &AttendanceSubmission| {
            let repo = repo_for_save.clone();
            let submission = submission.clone();
            async move {
                let result = match submission {
                    AttendanceSubmission::Mark(payload) => repo.mark_attendance(payload).await,
                    AttendanceSubmission::Update { id, payload } => {
                        repo.update_attendance(id, payload).await
                    }
                };
                match &result {
                    Ok(_) => {
                        modal.update(|state| state.succeed());
                        form.set(AttendanceFormState::default());
                        field_errors.set(AttendanceErrors::new());
                    }
                    Err(err) => {
                        log::warn!("saving attendance failed: {}", err);
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
                let result = repo.delete_attendance(id).await;
                match &result {
                    Ok(()) => modal.update(|state| state.succeed()),
                    Err(err) => {
                        log::warn!("deleting attendance {} failed: {}", id, err);
                        modal.update(|state| state.fail(err.message_or(DELETE_ERROR_FALLBACK)));
                    }
                }
                result
            }
        });

        Self {
            employees_resource,
            attendance_resource,
            filter,
            directory,
            rows,
            form,
            field_errors,
            modal,
            save_action,
            delete_action,
        }
    }

    /// Employees loaded successfully and there are none, so nothing can be
    /// marked yet.
    pub fn has_no_employees(&self) -> bool {
        matches!(self.employees_resource.get(), Some(Ok(list)) if list.is_empty())
    }

    pub fn summary(&self) -> AttendanceSummary {
        self.rows.with(|rows| AttendanceSummary::from_rows(rows))
    }

    pub fn open_add(&self) {
        let mut opened = false;
        self.modal.update(|state| opened = state.open_add());
        if opened {
            self.form.set(AttendanceFormState::default());
            self.field_errors.set(AttendanceErrors::new());
        }
    }

    pub fn open_edit(&self, row: AttendanceRow) {
        let prefill = AttendanceFormState::from_record(&row.record);
        let mut opened = false;
        self.modal.update(|state| opened = state.open_edit(row));
        if opened {
            self.form.set(prefill);
            self.field_errors.set(AttendanceErrors::new());
        }
    }

    pub fn open_delete(&self, row: AttendanceRow) {
        self.modal.update(|state| {
            state.open_delete(row);
        });
    }

    pub fn cancel(&self) {
        self.modal.update(|state| {
            state.cancel();
        });
    }

    pub fn select_employee(&self, value: String) {
        self.form.update(|form| form.employee_id = value);
        self.clear_error(AttendanceField::Employee);
    }

    pub fn set_date(&self, value: String) {
        self.form.update(|form| form.date = value);
        self.clear_error(AttendanceField::Date);
    }

    pub fn set_status(&self, status: AttendanceStatus) {
        self.form.update(|form| form.status = status);
    }

    fn clear_error(&self, field: AttendanceField) {
        self.field_errors.update(|errors| {
            errors.remove(&field);
        });
    }

    pub fn set_filter(&self, value: String) {
        self.filter.set(value);
    }

    pub fn submit(&self) -> bool {
        self.submit_as_of(today_in_app_tz())
    }

    /// Validates against `today` and dispatches the open form.
    pub fn submit_as_of(&self, today: NaiveDate) -> bool {
        if !self.modal.with_untracked(|state| state.is_form_open()) {
            return false;
        }
        self.modal.update(|state| state.clear_error());
        let payload = match self.form.with_untracked(|form| form.to_payload(today)) {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors.set(errors);
                return false;
            }
        };
        self.field_errors.set(AttendanceErrors::new());

        let mut submission = None;
        self.modal.update(|state| {
            if state.begin_request() {
                submission = Some(match state.target() {
                    Some(row) => AttendanceSubmission::Update {
                        id: row.record.id,
                        payload,
                    },
                    None => AttendanceSubmission::Mark(payload),
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
                target = state.target().map(|row| row.record.id);
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

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AttendanceViewModel::new_with(api, use_query_cache())
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::{
        state::modal::ModalPhase,
        test_support::{
            helpers::{attendance_json, date, employee, employee_json, record},
            ssr::{wait_until, with_local_runtime_async, with_quiet_runtime},
        },
    };
    use httpmock::prelude::*;
    use serde_json::json;

    fn offline_view_model() -> AttendanceViewModel {
        AttendanceViewModel::new_with(
            ApiClient::new_with_base_url("http://127.0.0.1:9/api"),
            QueryCache::new(),
        )
    }

    #[test]
    fn rows_exclude_records_of_unknown_employees() {
        with_quiet_runtime(|| {
            let vm = offline_view_model();
            vm.employees_resource
                .set(Ok(vec![employee(1, "EMP001", "Alice Example")]));
            vm.attendance_resource.set(Ok(vec![
                record(1, 1, "2024-03-15", AttendanceStatus::Present),
                record(2, 42, "2024-03-15", AttendanceStatus::Present),
                record(3, 1, "2024-03-14", AttendanceStatus::Absent),
            ]));

            let rows = vm.rows.get_untracked();
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|row| row.employee_name == "Alice Example"));
            assert_eq!(vm.summary(), AttendanceSummary { total: 2, present: 1 });
            assert!(!vm.has_no_employees());
        });
    }

    #[test]
    fn empty_employee_list_is_reported() {
        with_quiet_runtime(|| {
            let vm = offline_view_model();
            assert!(!vm.has_no_employees());
            vm.employees_resource.set(Ok(Vec::new()));
            assert!(vm.has_no_employees());
        });
    }

    #[test]
    fn future_date_blocks_submission() {
        with_quiet_runtime(|| {
            let vm = offline_view_model();
            vm.open_add();
            vm.select_employee("1".into());
            vm.set_date("2024-03-16".into());
            assert!(!vm.submit_as_of(date("2024-03-15")));
            assert_eq!(
                vm.field_errors.get_untracked()[&AttendanceField::Date],
                "Attendance cannot be marked for a future date"
            );
            assert_eq!(vm.modal.get_untracked(), ModalState::Add(ModalPhase::Editing));

            vm.set_date("2024-03-15".into());
            assert!(vm.field_errors.get_untracked().is_empty());
        });
    }

    #[test]
    fn cancelling_delete_keeps_rows() {
        with_quiet_runtime(|| {
            let vm = offline_view_model();
            vm.employees_resource
                .set(Ok(vec![employee(1, "EMP001", "Alice Example")]));
            vm.attendance_resource
                .set(Ok(vec![record(1, 1, "2024-03-15", AttendanceStatus::Present)]));
            let row = vm.rows.get_untracked()[0].clone();
            vm.open_delete(row);
            vm.cancel();
            assert!(vm.modal.get_untracked().is_closed());
            assert_eq!(vm.rows.get_untracked().len(), 1);
            assert!(vm.delete_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn marking_attendance_refetches_the_list() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/employees/");
                    then.status(200)
                        .json_body(json!([employee_json(1, "EMP001", "Alice Example")]));
                })
                .await;
            let mut initial = server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([]));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/api/attendance/");
                    then.status(201)
                        .json_body(attendance_json(5, 1, "2024-03-15", "Present"));
                })
                .await;

            let cache = QueryCache::new();
            let vm = AttendanceViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                cache,
            );
            assert!(wait_until(|| untrack(|| vm.attendance_resource.get()).is_some()).await);
            assert!(vm.rows.get_untracked().is_empty());

            initial.delete_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200)
                        .json_body(json!([attendance_json(5, 1, "2024-03-15", "Present")]));
                })
                .await;

            vm.open_add();
            vm.select_employee("1".into());
            vm.set_date("2024-03-15".into());
            assert!(vm.submit_as_of(date("2024-03-15")));
            assert!(wait_until(|| vm.save_action.value().get_untracked().is_some()).await);
            assert!(vm.modal.get_untracked().is_closed());
            assert_eq!(cache.generation_untracked(Tag::Attendance), 1);

            assert!(wait_until(|| vm.rows.get_untracked().len() == 1).await);
            assert_eq!(vm.rows.get_untracked()[0].employee_name, "Alice Example");
        });
    }

    /// Mock server already answering the employee list with Alice.
    async fn server_with_one_employee() -> MockServer {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200)
                    .json_body(json!([employee_json(1, "EMP001", "Alice Example")]));
            })
            .await;
        server
    }

    #[test]
    fn successful_edit_refetches_attendance_but_not_employees() {
        with_local_runtime_async(|| async {
            let server = server_with_one_employee().await;
            let mut initial = server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200)
                        .json_body(json!([attendance_json(5, 1, "2024-03-15", "Present")]));
                })
                .await;
            let update = server
                .mock_async(|when, then| {
                    when.method(PUT)
                        .path("/api/attendance/5")
                        .json_body_partial(r#"{ "employee_id": 1, "status": "Absent" }"#);
                    then.status(200)
                        .json_body(attendance_json(5, 1, "2024-03-15", "Absent"));
                })
                .await;

            let cache = QueryCache::new();
            let vm = AttendanceViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                cache,
            );
            assert!(wait_until(|| vm.rows.get_untracked().len() == 1).await);

            initial.delete_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200)
                        .json_body(json!([attendance_json(5, 1, "2024-03-15", "Absent")]));
                })
                .await;

            let row = vm.rows.get_untracked()[0].clone();
            vm.open_edit(row);
            vm.set_status(AttendanceStatus::Absent);
            assert!(vm.submit_as_of(date("2024-03-15")));
            assert!(matches!(
                vm.modal.get_untracked(),
                ModalState::Edit(_, ModalPhase::InFlight)
            ));

            assert!(wait_until(|| vm.save_action.value().get_untracked().is_some()).await);
            update.assert_async().await;
            assert_eq!(vm.modal.get_untracked(), ModalState::Closed);
            assert_eq!(cache.generation_untracked(Tag::Attendance), 1);
            assert_eq!(cache.generation_untracked(Tag::Employees), 0);

            assert!(wait_until(|| {
                vm.rows
                    .get_untracked()
                    .first()
                    .is_some_and(|row| row.record.status == AttendanceStatus::Absent)
            })
            .await);
            assert_eq!(vm.summary(), AttendanceSummary { total: 1, present: 0 });
        });
    }

    #[test]
    fn successful_delete_refetches_attendance_but_not_employees() {
        with_local_runtime_async(|| async {
            let server = server_with_one_employee().await;
            let mut initial = server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([
                        attendance_json(5, 1, "2024-03-15", "Present"),
                        attendance_json(6, 1, "2024-03-14", "Absent")
                    ]));
                })
                .await;
            let delete = server
                .mock_async(|when, then| {
                    when.method(DELETE).path("/api/attendance/5");
                    then.status(204);
                })
                .await;

            let cache = QueryCache::new();
            let vm = AttendanceViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                cache,
            );
            assert!(wait_until(|| vm.rows.get_untracked().len() == 2).await);

            initial.delete_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200)
                        .json_body(json!([attendance_json(6, 1, "2024-03-14", "Absent")]));
                })
                .await;

            let row = vm.rows.get_untracked()[0].clone();
            vm.open_delete(row);
            assert!(vm.confirm_delete());
            assert!(vm.modal.get_untracked().in_flight());

            assert!(wait_until(|| vm.delete_action.value().get_untracked().is_some()).await);
            delete.assert_async().await;
            assert_eq!(vm.modal.get_untracked(), ModalState::Closed);
            assert_eq!(cache.generation_untracked(Tag::Attendance), 1);
            assert_eq!(cache.generation_untracked(Tag::Employees), 0);

            assert!(wait_until(|| vm.rows.get_untracked().len() == 1).await);
            assert_eq!(vm.rows.get_untracked()[0].record.id, 6);
        });
    }

    #[test]
    fn invalid_resubmit_after_server_failure_drops_old_message() {
        with_local_runtime_async(|| async {
            let server = server_with_one_employee().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([]));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/api/attendance/");
                    then.status(400)
                        .json_body(json!({ "detail": "Attendance already marked for this date" }));
                })
                .await;

            let vm = AttendanceViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                QueryCache::new(),
            );
            vm.open_add();
            vm.select_employee("1".into());
            vm.set_date("2024-03-15".into());
            assert!(vm.submit_as_of(date("2024-03-15")));
            assert!(wait_until(|| vm.save_action.value().get_untracked().is_some()).await);
            assert_eq!(
                vm.modal.get_untracked().error().as_deref(),
                Some("Attendance already marked for this date")
            );

            vm.set_date("2024-03-20".into());
            assert!(!vm.submit_as_of(date("2024-03-15")));
            assert_eq!(vm.modal.get_untracked(), ModalState::Add(ModalPhase::Editing));
            assert!(vm
                .field_errors
                .get_untracked()
                .contains_key(&AttendanceField::Date));
        });
    }
}
