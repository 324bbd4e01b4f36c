use crate::api::{Employee, EmployeePayload};
use regex::Regex;
use std::{collections::BTreeMap, sync::OnceLock};

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load employees";
pub const SAVE_ERROR_FALLBACK: &str = "Something went wrong. Please try again.";
pub const DELETE_ERROR_FALLBACK: &str = "Failed to delete employee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    EmployeeId,
    Name,
    Email,
    Department,
    Role,
    Salary,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 6] = [
        EmployeeField::EmployeeId,
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Department,
        EmployeeField::Role,
        EmployeeField::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
            EmployeeField::Role => "role",
            EmployeeField::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::Name => "Name",
            EmployeeField::Email => "Email",
            EmployeeField::Department => "Department",
            EmployeeField::Role => "Role",
            EmployeeField::Salary => "Salary",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "EMP001",
            EmployeeField::Name => "John Doe",
            EmployeeField::Email => "john@example.com",
            EmployeeField::Department => "Engineering",
            EmployeeField::Role => "Software Engineer",
            EmployeeField::Salary => "50000",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            EmployeeField::Salary => "number",
            _ => "text",
        }
    }
}

pub type FieldErrors = BTreeMap<EmployeeField, String>;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Raw text of the add/edit form, exactly as typed (apart from the code's
/// upper-casing).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub salary: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            role: employee.role.clone(),
            salary: format_salary(employee.salary),
        }
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::Name => &self.name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
            EmployeeField::Role => &self.role,
            EmployeeField::Salary => &self.salary,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => self.employee_id = value.to_uppercase(),
            EmployeeField::Name => self.name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
            EmployeeField::Role => self.role = value,
            EmployeeField::Salary => self.salary = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let code = self.employee_id.trim();
        if code.is_empty() {
            errors.insert(EmployeeField::EmployeeId, "Employee ID is required".into());
        } else if code.chars().count() < 3 {
            errors.insert(
                EmployeeField::EmployeeId,
                "Employee ID must be at least 3 characters".into(),
            );
        }

        if self.name.trim().is_empty() {
            errors.insert(EmployeeField::Name, "Name is required".into());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(EmployeeField::Email, "Email is required".into());
        } else if !is_valid_email(email) {
            errors.insert(EmployeeField::Email, "Invalid email format".into());
        }

        if self.department.trim().is_empty() {
            errors.insert(EmployeeField::Department, "Department is required".into());
        }
        if self.role.trim().is_empty() {
            errors.insert(EmployeeField::Role, "Role is required".into());
        }

        let salary = self.salary.trim();
        if salary.is_empty() {
            errors.insert(EmployeeField::Salary, "Salary is required".into());
        } else {
            match salary.parse::<f64>() {
                Ok(value) if !value.is_finite() => {
                    errors.insert(
                        EmployeeField::Salary,
                        "Salary must be a valid number".into(),
                    );
                }
                Ok(value) if value <= 0.0 => {
                    errors.insert(
                        EmployeeField::Salary,
                        "Salary must be greater than 0".into(),
                    );
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(
                        EmployeeField::Salary,
                        "Salary must be a valid number".into(),
                    );
                }
            }
        }

        errors
    }

    /// Validated, trimmed payload. Returns the field errors instead when the
    /// form is not submittable.
    pub fn to_payload(&self) -> Result<EmployeePayload, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let salary = self.salary.trim().parse::<f64>().map_err(|_| {
            FieldErrors::from([(
                EmployeeField::Salary,
                "Salary must be a valid number".to_string(),
            )])
        })?;
        Ok(EmployeePayload {
            employee_id: self.employee_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            role: self.role.trim().to_string(),
            salary,
        })
    }
}

pub fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{:.0}", salary)
    } else {
        salary.to_string()
    }
}

/// Table display: thousands separators, no decimals.
pub fn display_salary(salary: f64) -> String {
    let whole = format!("{:.0}", salary.abs());
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if salary < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn delete_prompt(employee: &Employee) -> String {
    format!("Are you sure you want to delete {}?", employee.name)
}
