//! Finance deposits screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::format;
use crate::model::{Row, Value};
use crate::table::{Alignment, ColumnSpec, FilterSpec};

pub const CHANNELS: [&str; 3] = ["Bank Transfer", "Remita", "Cheque"];

pub const STATUSES: [&str; 3] = ["Pending", "Cleared", "Bounced"];

/// Money paid into a government account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: String,
    pub reference: String,
    pub depositor: String,
    pub bank: String,
    pub channel: String,
    pub amount: Decimal,
    pub deposit_date: NaiveDate,
    pub status: String,
}

impl Row for Deposit {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(&self.id),
            "reference" => Value::from(&self.reference),
            "depositor" => Value::from(&self.depositor),
            "bank" => Value::from(&self.bank),
            "channel" => Value::from(&self.channel),
            "amount" => Value::from(self.amount),
            "deposit_date" => Value::from(self.deposit_date),
            "status" => Value::from(&self.status),
            _ => Value::Null,
        }
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.id),
            Value::from(&self.reference),
            Value::from(&self.depositor),
            Value::from(&self.bank),
            Value::from(&self.channel),
            Value::from(self.amount),
            Value::from(self.deposit_date),
            Value::from(&self.status),
        ]
    }
}

pub fn columns<R: Row>() -> Vec<ColumnSpec<R>> {
    vec![
        ColumnSpec::new("reference", "Reference").sortable(),
        ColumnSpec::new("depositor", "Depositor").sortable(),
        ColumnSpec::new("bank", "Bank").sortable(),
        ColumnSpec::new("channel", "Channel"),
        ColumnSpec::new("amount", "Amount")
            .sortable()
            .align(Alignment::Right)
            .render(format::currency_cell),
        ColumnSpec::new("deposit_date", "Date")
            .sortable()
            .render(format::date_cell),
        ColumnSpec::new("status", "Status").render(format::badge_cell),
    ]
}

pub fn filters() -> Vec<FilterSpec> {
    vec![
        FilterSpec::select("channel", "Channel").options(CHANNELS),
        FilterSpec::select("status", "Status").options(STATUSES),
        FilterSpec::date("deposit_date", "Date"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableEngine;

    #[test]
    fn test_search_finds_amount_digits() {
        let rows = vec![Deposit {
            id: "DEP-001".to_string(),
            reference: "RRR-2931-0042".to_string(),
            depositor: "Federal Ministry of Works".to_string(),
            bank: "First Bank".to_string(),
            channel: "Remita".to_string(),
            amount: Decimal::new(2_500_000, 0),
            deposit_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            status: "Cleared".to_string(),
        }];
        let engine = TableEngine::new(rows, columns(), filters());

        engine.set_search_term("2500000");
        assert_eq!(engine.filtered_count(), 1);
        engine.set_search_term("0042");
        assert_eq!(engine.filtered_count(), 1);
        engine.set_search_term("zenith");
        assert_eq!(engine.filtered_count(), 0);
    }
}
