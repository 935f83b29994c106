//! Registrations review screen.

use crate::format;
use crate::model::Row;
use crate::registration::RegistrationStatus;
use crate::table::{ColumnSpec, FilterSpec};

pub fn columns<R: Row>() -> Vec<ColumnSpec<R>> {
    vec![
        ColumnSpec::new("full_name", "Name").sortable(),
        ColumnSpec::new("email", "Email").sortable(),
        ColumnSpec::new("ippis_number", "IPPIS No.").sortable(),
        ColumnSpec::new("ministry", "Ministry").sortable(),
        ColumnSpec::new("role", "Role"),
        ColumnSpec::new("status", "Status").render(format::badge_cell),
        ColumnSpec::new("created_at", "Submitted")
            .sortable()
            .render(format::date_cell),
    ]
}

pub fn filters() -> Vec<FilterSpec> {
    let statuses = [
        RegistrationStatus::Pending,
        RegistrationStatus::Approved,
        RegistrationStatus::Rejected,
    ];
    let status = statuses
        .into_iter()
        .fold(FilterSpec::select("status", "Status"), |spec, s| {
            spec.option(s.as_str(), s.label())
        });
    vec![status, FilterSpec::text("ministry", "Ministry")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{Registration, RegistrationRequest, RegistrationService};
    use crate::table::TableEngine;

    fn request(name: &str, email: &str, ippis: &str) -> RegistrationRequest {
        RegistrationRequest {
            full_name: name.into(),
            email: email.into(),
            ippis_number: ippis.into(),
            ministry: "Education".into(),
            role: "Teacher".into(),
        }
    }

    #[test]
    fn test_status_filter_over_service_rows() {
        let service = RegistrationService::new();
        let a = service.register(request("Ada Eze", "ada@fme.gov.ng", "2001")).unwrap();
        service.register(request("Bola Ade", "bola@fme.gov.ng", "2002")).unwrap();
        service.approve(a).unwrap();

        let engine: TableEngine<Registration> =
            TableEngine::from_source(&service, columns(), filters());
        engine.set_filter("status", "pending");
        let names: Vec<String> = engine.view().rows().iter().map(|r| r.full_name.clone()).collect();
        assert_eq!(names, vec!["Bola Ade"]);

        engine.set_filter("status", "approved");
        engine.reload(&service);
        assert!(engine.filter_value("status").is_none());
        assert_eq!(engine.filtered_count(), 2);
    }
}
