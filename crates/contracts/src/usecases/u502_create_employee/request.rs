use serde::Serialize;

/// Body of `POST /create_employee`.
///
/// Every field is sent as entered, the backend parses numbers and dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateEmployeeRequest {
    pub employee_name: String,
    pub company_name: String,
    pub start_date: String,
    pub job_title: String,
    pub job_responsibilities: String,
    pub salary: String,
    pub benefits: String,
    pub work_hours: String,
    pub leave_days: String,
    pub notice_period: String,
    pub hourly_rate: String,
    pub number_of_hours: String,
    pub description_of_services: String,
    pub fee_amount: String,
    pub payment_schedule: String,
    pub ownership_terms: String,
    pub company_representative: String,
    pub client_representative: String,
}

/// Addressable field of [`CreateEmployeeRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    EmployeeName,
    CompanyName,
    StartDate,
    JobTitle,
    JobResponsibilities,
    Salary,
    Benefits,
    WorkHours,
    LeaveDays,
    NoticePeriod,
    HourlyRate,
    NumberOfHours,
    DescriptionOfServices,
    FeeAmount,
    PaymentSchedule,
    OwnershipTerms,
    CompanyRepresentative,
    ClientRepresentative,
}

impl EmployeeField {
    /// Form order
    pub const ALL: [EmployeeField; 18] = [
        EmployeeField::EmployeeName,
        EmployeeField::CompanyName,
        EmployeeField::StartDate,
        EmployeeField::JobTitle,
        EmployeeField::JobResponsibilities,
        EmployeeField::Salary,
        EmployeeField::Benefits,
        EmployeeField::WorkHours,
        EmployeeField::LeaveDays,
        EmployeeField::NoticePeriod,
        EmployeeField::HourlyRate,
        EmployeeField::NumberOfHours,
        EmployeeField::DescriptionOfServices,
        EmployeeField::FeeAmount,
        EmployeeField::PaymentSchedule,
        EmployeeField::OwnershipTerms,
        EmployeeField::CompanyRepresentative,
        EmployeeField::ClientRepresentative,
    ];

    /// JSON key on the wire
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::EmployeeName => "employee_name",
            EmployeeField::CompanyName => "company_name",
            EmployeeField::StartDate => "start_date",
            EmployeeField::JobTitle => "job_title",
            EmployeeField::JobResponsibilities => "job_responsibilities",
            EmployeeField::Salary => "salary",
            EmployeeField::Benefits => "benefits",
            EmployeeField::WorkHours => "work_hours",
            EmployeeField::LeaveDays => "leave_days",
            EmployeeField::NoticePeriod => "notice_period",
            EmployeeField::HourlyRate => "hourly_rate",
            EmployeeField::NumberOfHours => "number_of_hours",
            EmployeeField::DescriptionOfServices => "description_of_services",
            EmployeeField::FeeAmount => "fee_amount",
            EmployeeField::PaymentSchedule => "payment_schedule",
            EmployeeField::OwnershipTerms => "ownership_terms",
            EmployeeField::CompanyRepresentative => "company_representative",
            EmployeeField::ClientRepresentative => "client_representative",
        }
    }
}

impl CreateEmployeeRequest {
    pub const PATH: &'static str = "/create_employee";

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeName => &self.employee_name,
            EmployeeField::CompanyName => &self.company_name,
            EmployeeField::StartDate => &self.start_date,
            EmployeeField::JobTitle => &self.job_title,
            EmployeeField::JobResponsibilities => &self.job_responsibilities,
            EmployeeField::Salary => &self.salary,
            EmployeeField::Benefits => &self.benefits,
            EmployeeField::WorkHours => &self.work_hours,
            EmployeeField::LeaveDays => &self.leave_days,
            EmployeeField::NoticePeriod => &self.notice_period,
            EmployeeField::HourlyRate => &self.hourly_rate,
            EmployeeField::NumberOfHours => &self.number_of_hours,
            EmployeeField::DescriptionOfServices => &self.description_of_services,
            EmployeeField::FeeAmount => &self.fee_amount,
            EmployeeField::PaymentSchedule => &self.payment_schedule,
            EmployeeField::OwnershipTerms => &self.ownership_terms,
            EmployeeField::CompanyRepresentative => &self.company_representative,
            EmployeeField::ClientRepresentative => &self.client_representative,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::EmployeeName => &mut self.employee_name,
            EmployeeField::CompanyName => &mut self.company_name,
            EmployeeField::StartDate => &mut self.start_date,
            EmployeeField::JobTitle => &mut self.job_title,
            EmployeeField::JobResponsibilities => &mut self.job_responsibilities,
            EmployeeField::Salary => &mut self.salary,
            EmployeeField::Benefits => &mut self.benefits,
            EmployeeField::WorkHours => &mut self.work_hours,
            EmployeeField::LeaveDays => &mut self.leave_days,
            EmployeeField::NoticePeriod => &mut self.notice_period,
            EmployeeField::HourlyRate => &mut self.hourly_rate,
            EmployeeField::NumberOfHours => &mut self.number_of_hours,
            EmployeeField::DescriptionOfServices => &mut self.description_of_services,
            EmployeeField::FeeAmount => &mut self.fee_amount,
            EmployeeField::PaymentSchedule => &mut self.payment_schedule,
            EmployeeField::OwnershipTerms => &mut self.ownership_terms,
            EmployeeField::CompanyRepresentative => &mut self.company_representative,
            EmployeeField::ClientRepresentative => &mut self.client_representative,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_match_serialized_body() {
        let mut req = CreateEmployeeRequest::default();
        for (i, field) in EmployeeField::ALL.iter().enumerate() {
            req.set(*field, format!("v{}", i));
        }

        let body = serde_json::to_value(&req).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), EmployeeField::ALL.len());
        for (i, field) in EmployeeField::ALL.iter().enumerate() {
            assert_eq!(object[field.key()], format!("v{}", i));
            assert_eq!(req.get(*field), format!("v{}", i));
        }
    }

    #[test]
    fn test_fields_are_distinct() {
        let keys: HashSet<&str> = EmployeeField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), EmployeeField::ALL.len());
    }
}
