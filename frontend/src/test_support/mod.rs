#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    pub fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("fixture date")
    }

    pub fn employee(id: i64, code: &str, name: &str) -> Employee {
        Employee {
            id,
            employee_id: code.into(),
            name: name.into(),
            email: format!("{}@example.com", code.to_lowercase()),
            department: "Engineering".into(),
            role: "Developer".into(),
            salary: 50000.0,
        }
    }

    pub fn record(id: i64, employee_id: i64, day: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id,
            date: date(day),
            status,
        }
    }

    pub fn employee_json(id: i64, code: &str, name: &str) -> Value {
        serde_json::to_value(employee(id, code, name)).expect("employee fixture")
    }

    pub fn attendance_json(id: i64, employee_id: i64, day: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "date": day,
            "status": status
        })
    }

    /// True when some element in rendered markup carries a `disabled`
    /// attribute (as opposed to a `disabled:` utility class).
    pub fn has_disabled_attribute(html: &str) -> bool {
        [" disabled ", " disabled>", " disabled/", " disabled=\""]
            .iter()
            .any(|pattern| html.contains(pattern))
    }
}
