//! Employee terminations screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::format;
use crate::model::{Row, Value};
use crate::table::{Alignment, ColumnSpec, FilterSpec};

pub const TERMINATION_TYPES: [&str; 5] = [
    "Resignation",
    "Retirement",
    "Dismissal",
    "Contract End",
    "Death",
];

pub const STATUSES: [&str; 4] = ["Pending", "Approved", "Completed", "Rejected"];

/// An employee leaving the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Termination {
    pub id: String,
    pub employee_name: String,
    pub ippis_number: String,
    pub ministry: String,
    pub termination_type: String,
    pub effective_date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub final_settlement: Option<Decimal>,
}

impl Row for Termination {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(&self.id),
            "employee_name" => Value::from(&self.employee_name),
            "ippis_number" => Value::from(&self.ippis_number),
            "ministry" => Value::from(&self.ministry),
            "termination_type" => Value::from(&self.termination_type),
            "effective_date" => Value::from(self.effective_date),
            "status" => Value::from(&self.status),
            "final_settlement" => Value::from(self.final_settlement),
            _ => Value::Null,
        }
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.id),
            Value::from(&self.employee_name),
            Value::from(&self.ippis_number),
            Value::from(&self.ministry),
            Value::from(&self.termination_type),
            Value::from(self.effective_date),
            Value::from(&self.status),
        ]
    }
}

pub fn columns<R: Row>() -> Vec<ColumnSpec<R>> {
    vec![
        ColumnSpec::new("id", "Ref").sortable(),
        ColumnSpec::new("employee_name", "Employee").sortable(),
        ColumnSpec::new("ippis_number", "IPPIS No.").sortable(),
        ColumnSpec::new("ministry", "Ministry").sortable(),
        ColumnSpec::new("termination_type", "Type").sortable(),
        ColumnSpec::new("effective_date", "Effective")
            .sortable()
            .render(format::date_cell),
        ColumnSpec::new("status", "Status").render(format::badge_cell),
        ColumnSpec::new("final_settlement", "Settlement")
            .sortable()
            .align(Alignment::Right)
            .render(format::currency_cell),
    ]
}

pub fn filters() -> Vec<FilterSpec> {
    vec![
        FilterSpec::select("termination_type", "Type").options(TERMINATION_TYPES),
        FilterSpec::select("status", "Status").options(STATUSES),
        FilterSpec::date("effective_date", "Effective Date"),
    ]
}
