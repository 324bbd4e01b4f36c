use chrono::NaiveDate;

use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    endpoints::Endpoint,
    types::{ApiError, AttendancePayload, AttendanceRecord},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .send::<()>(&Endpoint::ListAttendance(date), None)
            .await?;
        map_typed_response(response).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &AttendancePayload,
    ) -> Result<AttendanceRecord, ApiError> {
        let response = self.send(&Endpoint::MarkAttendance, Some(payload)).await?;
        map_typed_response(response).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &AttendancePayload,
    ) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .send(&Endpoint::UpdateAttendance(id), Some(payload))
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .send::<()>(&Endpoint::DeleteAttendance(id), None)
            .await?;
        map_empty_response(response).await
    }
}
