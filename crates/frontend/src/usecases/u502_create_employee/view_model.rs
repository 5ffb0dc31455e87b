use contracts::usecases::u502_create_employee::{
    CreateEmployeeOutcome, CreateEmployeeResponse, EmployeeField,
};

use crate::shared::api_error::ApiError;
use crate::shared::page_effect::PageEffect;
use crate::system::auth::api::ApiReply;

/// Alert text when the server rejects without saying why
pub const CREATE_FAILED: &str = "An error occurred while creating the employee.";

/// How a field is edited in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
    LongText,
}

impl FieldKind {
    /// `type` attribute of the `<input>`; long text uses a textarea instead
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Text | FieldKind::LongText => "text",
        }
    }
}

pub fn field_label(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::EmployeeName => "Employee name",
        EmployeeField::CompanyName => "Company name",
        EmployeeField::StartDate => "Start date",
        EmployeeField::JobTitle => "Job title",
        EmployeeField::JobResponsibilities => "Job responsibilities",
        EmployeeField::Salary => "Salary",
        EmployeeField::Benefits => "Benefits",
        EmployeeField::WorkHours => "Work hours",
        EmployeeField::LeaveDays => "Leave days",
        EmployeeField::NoticePeriod => "Notice period",
        EmployeeField::HourlyRate => "Hourly rate",
        EmployeeField::NumberOfHours => "Number of hours",
        EmployeeField::DescriptionOfServices => "Description of services",
        EmployeeField::FeeAmount => "Fee amount",
        EmployeeField::PaymentSchedule => "Payment schedule",
        EmployeeField::OwnershipTerms => "Ownership terms",
        EmployeeField::CompanyRepresentative => "Company representative",
        EmployeeField::ClientRepresentative => "Client representative",
    }
}

pub fn field_kind(field: EmployeeField) -> FieldKind {
    match field {
        EmployeeField::StartDate => FieldKind::Date,
        EmployeeField::Salary
        | EmployeeField::LeaveDays
        | EmployeeField::HourlyRate
        | EmployeeField::NumberOfHours
        | EmployeeField::FeeAmount => FieldKind::Number,
        EmployeeField::JobResponsibilities
        | EmployeeField::Benefits
        | EmployeeField::DescriptionOfServices
        | EmployeeField::OwnershipTerms => FieldKind::LongText,
        _ => FieldKind::Text,
    }
}

pub fn created_message(employee_name: &str) -> String {
    format!("Employee {} created successfully.", employee_name)
}

/// Success reloads the page so the new employee shows up in the contract lists
pub fn effects_for(
    employee_name: &str,
    result: Result<ApiReply<CreateEmployeeResponse>, ApiError>,
) -> Vec<PageEffect> {
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => return vec![PageEffect::Log(format!("employee creation: {}", e))],
    };

    match reply.body.outcome(reply.status) {
        CreateEmployeeOutcome::Created => vec![
            PageEffect::Alert(created_message(employee_name)),
            PageEffect::Reload,
        ],
        CreateEmployeeOutcome::Rejected { error } => vec![PageEffect::Alert(
            error.unwrap_or_else(|| CREATE_FAILED.to_string()),
        )],
    }
}
