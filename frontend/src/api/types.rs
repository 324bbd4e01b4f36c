use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePayload {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Error body returned by the API. `detail` is either a plain message or a
/// list of field validation entries, each carrying a `msg`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorPayload {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text.clone()),
                        other => other
                            .get("msg")
                            .and_then(|msg| msg.as_str())
                            .map(str::to_string),
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const DETAIL: &'static str = "API_DETAIL";

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Builds the error for a non-success response from its status and
    /// (possibly empty) body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<ErrorPayload>(body).unwrap_or_default();
        match payload.message() {
            Some(message) => Self {
                error: message,
                code: Self::DETAIL.to_string(),
                details: payload.detail,
            },
            None => Self {
                error: format!("Request failed with status {}", status),
                code: "HTTP_ERROR".to_string(),
                details: None,
            },
        }
    }

    pub fn has_server_detail(&self) -> bool {
        self.code == Self::DETAIL
    }

    /// The server's `detail` when it sent one, else the caller's fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.has_server_detail() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_deserializes_from_api_shape() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "employee_id": "EMP007",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "department": "Engineering",
            "role": "Developer",
            "salary": 52000
        }))
        .unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.employee_id, "EMP007");
        assert_eq!(employee.salary, 52000.0);
    }

    #[test]
    fn attendance_record_uses_iso_dates_and_status_names() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employee_id": 7,
            "date": "2025-03-04",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(record.status, AttendanceStatus::Absent);

        let payload = AttendancePayload {
            employee_id: 7,
            date: record.date,
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["date"], "2025-03-04");
        assert_eq!(value["status"], "Present");
    }

    #[test]
    fn attendance_status_parses_known_names_only() {
        assert_eq!(AttendanceStatus::parse("Present"), Some(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::parse(" Absent "), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::parse("present"), None);
    }

    #[test]
    fn string_detail_becomes_message() {
        let error = ApiError::from_response_body(400, r#"{"detail":"Employee ID already exists"}"#);
        assert_eq!(error.code, ApiError::DETAIL);
        assert_eq!(error.error, "Employee ID already exists");
        assert_eq!(error.message_or("fallback"), "Employee ID already exists");
    }

    #[test]
    fn validation_list_detail_joins_messages() {
        let body = json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
                { "loc": ["body", "salary"], "msg": "Input should be greater than 0", "type": "greater_than" }
            ]
        })
        .to_string();
        let error = ApiError::from_response_body(422, &body);
        assert_eq!(
            error.error,
            "value is not a valid email address; Input should be greater than 0"
        );
        assert!(error.details.is_some());
    }

    #[test]
    fn missing_detail_falls_back_to_caller_message() {
        let error = ApiError::from_response_body(500, "Internal Server Error");
        assert_eq!(error.code, "HTTP_ERROR");
        assert_eq!(error.error, "Request failed with status 500");
        assert_eq!(
            error.message_or("Something went wrong. Please try again."),
            "Something went wrong. Please try again."
        );

        let blank = ApiError::from_response_body(400, r#"{"detail":"  "}"#);
        assert_eq!(blank.message_or("Failed to delete employee"), "Failed to delete employee");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::request_failed("offline").into();
        assert_eq!(raw, "offline");
        assert!(!ApiError::request_failed("offline").has_server_detail());
        assert_eq!(ApiError::request_failed("offline").code, "REQUEST_FAILED");
    }
}
