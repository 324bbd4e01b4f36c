use crate::{
    api::{ApiClient, ApiError, AttendancePayload, AttendanceRecord, Employee, Endpoint},
    state::cache::QueryCache,
};
use chrono::NaiveDate;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: ApiClient,
    cache: QueryCache,
}

impl AttendanceRepository {
    pub fn new_with_client(client: ApiClient, cache: QueryCache) -> Self {
        Self { client, cache }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(date).await
    }

    pub async fn mark_attendance(
        &self,
        payload: AttendancePayload,
    ) -> Result<AttendanceRecord, ApiError> {
        let record = self.client.mark_attendance(&payload).await?;
        self.cache.settle(&Endpoint::MarkAttendance);
        Ok(record)
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: AttendancePayload,
    ) -> Result<AttendanceRecord, ApiError> {
        let record = self.client.update_attendance(id, &payload).await?;
        self.cache.settle(&Endpoint::UpdateAttendance(id));
        Ok(record)
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_attendance(id).await?;
        self.cache.settle(&Endpoint::DeleteAttendance(id));
        Ok(())
    }
}
