use crate::{
    api::{AttendanceRecord, Employee},
    state::roster::{count_present, AttendanceRow, EmployeeDirectory},
};
use chrono::NaiveDate;

const RECENT_LIMIT: usize = 5;

/// Figures shown on the dashboard. Attendance of deleted employees is
/// ignored everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub todays_records: usize,
    pub todays_present: usize,
    /// Percentage rounded to one decimal; zero when nothing was recorded today.
    pub attendance_rate: f64,
    /// Last five known records in list order, newest first.
    pub recent: Vec<AttendanceRow>,
}

impl DashboardStats {
    pub fn compute(employees: &[Employee], records: &[AttendanceRecord], today: NaiveDate) -> Self {
        let rows = EmployeeDirectory::from_employees(employees).join_known(records);
        let todays: Vec<AttendanceRow> = rows
            .iter()
            .filter(|row| row.record.date == today)
            .cloned()
            .collect();
        let todays_records = todays.len();
        let todays_present = count_present(&todays);
        let attendance_rate = if todays_records == 0 {
            0.0
        } else {
            (todays_present as f64 / todays_records as f64 * 1000.0).round() / 10.0
        };
        let recent = rows.iter().rev().take(RECENT_LIMIT).cloned().collect();

        Self {
            total_employees: employees.len(),
            todays_records,
            todays_present,
            attendance_rate,
            recent,
        }
    }

    pub fn rate_label(&self) -> String {
        if self.todays_records == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.attendance_rate)
        }
    }
}
