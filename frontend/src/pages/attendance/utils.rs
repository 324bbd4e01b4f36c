use crate::{
    api::{AttendancePayload, AttendanceRecord, AttendanceStatus},
    state::roster::{count_present, AttendanceRow},
    utils::time::{format_date, parse_date},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load attendance";
pub const EMPLOYEES_ERROR_FALLBACK: &str = "Failed to load employees";
pub const SAVE_ERROR_FALLBACK: &str = "Something went wrong. Please try again.";
pub const DELETE_ERROR_FALLBACK: &str = "Failed to delete attendance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttendanceField {
    Employee,
    Date,
}

pub type AttendanceErrors = BTreeMap<AttendanceField, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceFormState {
    /// Selected employee's record id, as the `<select>` value. Empty when
    /// nothing is chosen.
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: String::new(),
            status: AttendanceStatus::Present,
        }
    }
}

impl AttendanceFormState {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            employee_id: record.employee_id.to_string(),
            date: format_date(record.date),
            status: record.status,
        }
    }

    pub fn validate(&self, today: NaiveDate) -> AttendanceErrors {
        let mut errors = AttendanceErrors::new();

        if self.employee_id.trim().parse::<i64>().is_err() {
            errors.insert(AttendanceField::Employee, "Please select an employee".into());
        }

        let date = self.date.trim();
        if date.is_empty() {
            errors.insert(AttendanceField::Date, "Date is required".into());
        } else {
            match parse_date(date) {
                None => {
                    errors.insert(
                        AttendanceField::Date,
                        "Date must be in YYYY-MM-DD format".into(),
                    );
                }
                Some(day) if day > today => {
                    errors.insert(
                        AttendanceField::Date,
                        "Attendance cannot be marked for a future date".into(),
                    );
                }
                Some(_) => {}
            }
        }

        errors
    }

    pub fn to_payload(&self, today: NaiveDate) -> Result<AttendancePayload, AttendanceErrors> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }
        match (
            self.employee_id.trim().parse::<i64>(),
            parse_date(self.date.trim()),
        ) {
            (Ok(employee_id), Some(date)) => Ok(AttendancePayload {
                employee_id,
                date,
                status: self.status,
            }),
            _ => Err(self.validate(today)),
        }
    }
}

/// Value of the date filter input: blank means every date.
pub fn filter_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        parse_date(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
}

impl AttendanceSummary {
    pub fn from_rows(rows: &[AttendanceRow]) -> Self {
        Self {
            total: rows.len(),
            present: count_present(rows),
        }
    }

    pub fn absent(&self) -> usize {
        self.total - self.present
    }
}

pub fn delete_prompt(row: &AttendanceRow) -> String {
    format!(
        "Delete attendance for {} on {}?",
        row.employee_name,
        format_date(row.record.date)
    )
}
