use crate::{
    api::{ApiClient, ApiError, Employee, EmployeePayload, Endpoint},
    state::cache::QueryCache,
};

/// Employee list queries and mutations. Successful mutations settle the
/// query cache so every mounted employee list refetches.
#[derive(Clone)]
pub struct EmployeesRepository {
    client: ApiClient,
    cache: QueryCache,
}

impl EmployeesRepository {
    pub fn new_with_client(client: ApiClient, cache: QueryCache) -> Self {
        Self { client, cache }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: EmployeePayload) -> Result<Employee, ApiError> {
        let created = self.client.create_employee(&payload).await?;
        self.cache.settle(&Endpoint::CreateEmployee);
        Ok(created)
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let updated = self.client.update_employee(id, &payload).await?;
        self.cache.settle(&Endpoint::UpdateEmployee(id));
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await?;
        self.cache.settle(&Endpoint::DeleteEmployee(id));
        Ok(())
    }
}
