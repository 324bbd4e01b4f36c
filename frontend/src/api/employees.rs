use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    endpoints::Endpoint,
    types::{ApiError, Employee, EmployeePayload},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.send::<()>(&Endpoint::ListEmployees, None).await?;
        map_typed_response(response).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let response = self.send(&Endpoint::CreateEmployee, Some(payload)).await?;
        map_typed_response(response).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let response = self
            .send(&Endpoint::UpdateEmployee(id), Some(payload))
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let response = self.send::<()>(&Endpoint::DeleteEmployee(id), None).await?;
        map_empty_response(response).await
    }
}
