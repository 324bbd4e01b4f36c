use chrono::NaiveDate;
use reqwest::Method;

/// Cache tag shared by the list query of a resource and every mutation on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Employees,
    Attendance,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Employees => "Employees",
            Tag::Attendance => "Attendance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListEmployees,
    CreateEmployee,
    UpdateEmployee(i64),
    DeleteEmployee(i64),
    ListAttendance(Option<NaiveDate>),
    MarkAttendance,
    UpdateAttendance(i64),
    DeleteAttendance(i64),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListEmployees | Endpoint::ListAttendance(_) => Method::GET,
            Endpoint::CreateEmployee | Endpoint::MarkAttendance => Method::POST,
            Endpoint::UpdateEmployee(_) | Endpoint::UpdateAttendance(_) => Method::PUT,
            Endpoint::DeleteEmployee(_) | Endpoint::DeleteAttendance(_) => Method::DELETE,
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListEmployees | Endpoint::CreateEmployee => "employees/".to_string(),
            Endpoint::UpdateEmployee(id) | Endpoint::DeleteEmployee(id) => {
                format!("employees/{}", id)
            }
            Endpoint::ListAttendance(_) | Endpoint::MarkAttendance => "attendance/".to_string(),
            Endpoint::UpdateAttendance(id) | Endpoint::DeleteAttendance(id) => {
                format!("attendance/{}", id)
            }
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ListAttendance(Some(date)) => {
                vec![("date", date.format("%Y-%m-%d").to_string())]
            }
            _ => Vec::new(),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }

    pub fn tag(&self) -> Tag {
        match self {
            Endpoint::ListEmployees
            | Endpoint::CreateEmployee
            | Endpoint::UpdateEmployee(_)
            | Endpoint::DeleteEmployee(_) => Tag::Employees,
            Endpoint::ListAttendance(_)
            | Endpoint::MarkAttendance
            | Endpoint::UpdateAttendance(_)
            | Endpoint::DeleteAttendance(_) => Tag::Attendance,
        }
    }

    pub fn is_mutation(&self) -> bool {
        self.method() != Method::GET
    }

    /// Tag whose cached lists this query reads.
    pub fn provides(&self) -> Option<Tag> {
        (!self.is_mutation()).then(|| self.tag())
    }

    /// Tag whose cached lists go stale once this mutation succeeds.
    pub fn invalidates(&self) -> Option<Tag> {
        self.is_mutation().then(|| self.tag())
    }
}
