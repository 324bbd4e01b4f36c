use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

/// Every attendance record, unfiltered; the dashboard picks out today itself.
pub async fn fetch_attendance(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.list_attendance(None).await
}
