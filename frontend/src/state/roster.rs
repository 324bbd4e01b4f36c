use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use std::collections::HashMap;

/// Employee names keyed by server id, used to label attendance rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDirectory {
    names: HashMap<i64, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub record: AttendanceRecord,
    pub employee_name: String,
}

impl AttendanceRow {
    pub fn is_present(&self) -> bool {
        self.record.status == AttendanceStatus::Present
    }
}

impl EmployeeDirectory {
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            names: employees
                .iter()
                .map(|employee| (employee.id, employee.name.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name_of(&self, employee_id: i64) -> Option<&str> {
        self.names.get(&employee_id).map(String::as_str)
    }

    /// Rows for records whose employee still exists, in list order. Records
    /// pointing at deleted employees are dropped.
    pub fn join_known(&self, records: &[AttendanceRecord]) -> Vec<AttendanceRow> {
        records
            .iter()
            .filter_map(|record| {
                self.name_of(record.employee_id).map(|name| AttendanceRow {
                    record: record.clone(),
                    employee_name: name.to_string(),
                })
            })
            .collect()
    }
}

pub fn count_present(rows: &[AttendanceRow]) -> usize {
    rows.iter().filter(|row| row.is_present()).count()
}
