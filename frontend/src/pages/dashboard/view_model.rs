use super::{repository, utils::DashboardStats};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, Employee, Tag},
    state::cache::{use_query_cache, QueryCache},
    utils::time::today_in_app_tz,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub attendance_resource: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    pub stats: Memo<DashboardStats>,
    pub loading: Signal<bool>,
}

impl DashboardViewModel {
    pub fn new_with(api: ApiClient, cache: QueryCache) -> Self {
        let api_clone = api.clone();
        let employees_resource = create_resource(
            move || cache.generation(Tag::Employees),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_employees(&api).await }
            },
        );

        let attendance_resource = create_resource(
            move || cache.generation(Tag::Attendance),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_attendance(&api).await }
            },
        );

        let stats = create_memo(move |_| {
            let employees = match employees_resource.get() {
                Some(Ok(list)) => list,
                _ => Vec::new(),
            };
            let records = match attendance_resource.get() {
                Some(Ok(list)) => list,
                _ => Vec::new(),
            };
            DashboardStats::compute(&employees, &records, today_in_app_tz())
        });

        let loading = Signal::derive(move || {
            employees_resource.loading().get() || attendance_resource.loading().get()
        });

        Self {
            employees_resource,
            attendance_resource,
            stats,
            loading,
        }
    }

    pub fn employees_error(&self) -> Option<ApiError> {
        self.employees_resource.get().and_then(Result::err)
    }

    pub fn attendance_error(&self) -> Option<ApiError> {
        self.attendance_resource.get().and_then(Result::err)
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    DashboardViewModel::new_with(api, use_query_cache())
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::{
        api::AttendanceStatus,
        test_support::{
            helpers::{attendance_json, employee_json},
            ssr::{wait_until, with_local_runtime_async},
        },
        utils::time::format_date,
    };
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn stats_follow_both_lists_and_refresh_on_invalidation() {
        with_local_runtime_async(|| async {
            let today = format_date(today_in_app_tz());
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/employees/");
                    then.status(200).json_body(json!([
                        employee_json(1, "EMP001", "Alice Example"),
                        employee_json(2, "EMP002", "Bob Builder")
                    ]));
                })
                .await;
            let mut first = server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([
                        attendance_json(1, 1, &today, "Present"),
                        attendance_json(2, 3, &today, "Present")
                    ]));
                })
                .await;

            let cache = QueryCache::new();
            let vm = DashboardViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                cache,
            );
            assert!(wait_until(|| vm.stats.get_untracked().todays_records == 1).await);
            let stats = vm.stats.get_untracked();
            assert_eq!(stats.total_employees, 2);
            assert_eq!(stats.rate_label(), "100.0%");
            assert!(vm.employees_error().is_none());
            assert!(vm.attendance_error().is_none());

            first.delete_async().await;
            let today_for_mock = today.clone();
            server
                .mock_async(move |when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([
                        attendance_json(1, 1, &today_for_mock, "Present"),
                        attendance_json(3, 2, &today_for_mock, "Absent")
                    ]));
                })
                .await;
            cache.invalidate(Tag::Attendance);

            assert!(wait_until(|| vm.stats.get_untracked().todays_records == 2).await);
            let stats = vm.stats.get_untracked();
            assert_eq!(stats.rate_label(), "50.0%");
            assert_eq!(stats.recent[0].record.status, AttendanceStatus::Absent);
        });
    }

    #[test]
    fn failed_load_is_reported() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/employees/");
                    then.status(500);
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/attendance/");
                    then.status(200).json_body(json!([]));
                })
                .await;

            let vm = DashboardViewModel::new_with(
                ApiClient::new_with_base_url(server.url("/api")),
                QueryCache::new(),
            );
            assert!(wait_until(|| vm.employees_error().is_some()).await);
            assert_eq!(
                vm.employees_error().map(|err| err.code),
                Some("HTTP_ERROR".to_string())
            );
            assert!(wait_until(|| untrack(|| vm.attendance_resource.get()).is_some()).await);
            assert!(vm.attendance_error().is_none());
            assert_eq!(vm.stats.get_untracked(), DashboardStats::default());
        });
    }
}
