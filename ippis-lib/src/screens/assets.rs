//! Asset register screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::format;
use crate::model::{Row, Value};
use crate::table::{Alignment, ColumnSpec, FilterSpec};

pub const CATEGORIES: [&str; 5] = ["Computers", "Furniture", "Vehicles", "Printers", "Networking"];

pub const STATUSES: [&str; 4] = ["Active", "Assigned", "In Maintenance", "Retired"];

/// A government-owned asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub serial_number: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub location: String,
    pub status: String,
    pub purchase_date: NaiveDate,
    pub value: Decimal,
}

impl Row for Asset {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(&self.id),
            "name" => Value::from(&self.name),
            "category" => Value::from(&self.category),
            "serial_number" => Value::from(&self.serial_number),
            "assigned_to" => Value::from(self.assigned_to.clone()),
            "location" => Value::from(&self.location),
            "status" => Value::from(&self.status),
            "purchase_date" => Value::from(self.purchase_date),
            "value" => Value::from(self.value),
            _ => Value::Null,
        }
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.id),
            Value::from(&self.name),
            Value::from(&self.category),
            Value::from(&self.serial_number),
            Value::from(self.assigned_to.clone()),
            Value::from(&self.location),
            Value::from(&self.status),
            Value::from(self.purchase_date),
            Value::from(self.value),
        ]
    }
}

pub fn columns<R: Row>() -> Vec<ColumnSpec<R>> {
    vec![
        ColumnSpec::new("id", "Asset ID").sortable(),
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("category", "Category").sortable(),
        ColumnSpec::new("serial_number", "Serial No."),
        ColumnSpec::new("assigned_to", "Assigned To").sortable(),
        ColumnSpec::new("location", "Location").sortable(),
        ColumnSpec::new("status", "Status").render(format::badge_cell),
        ColumnSpec::new("purchase_date", "Purchased")
            .sortable()
            .render(format::date_cell),
        ColumnSpec::new("value", "Value")
            .sortable()
            .align(Alignment::Right)
            .render(format::currency_cell),
    ]
}

pub fn filters() -> Vec<FilterSpec> {
    vec![
        FilterSpec::select("category", "Category").options(CATEGORIES),
        FilterSpec::select("status", "Status").options(STATUSES),
        FilterSpec::text("location", "Location"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, TableEngine, Tone};

    fn asset(id: &str, category: &str, value: i64) -> Asset {
        Asset {
            id: id.to_string(),
            name: format!("{} item", category),
            category: category.to_string(),
            serial_number: format!("SN-{}", id),
            assigned_to: None,
            location: "Abuja HQ".to_string(),
            status: "Active".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            value: Decimal::from(value),
        }
    }

    #[test]
    fn test_asset_json_uses_field_keys() {
        let json = r#"{
            "id": "AST-001",
            "name": "HP EliteBook 840",
            "category": "Computers",
            "serial_number": "5CG1234XYZ",
            "location": "Abuja HQ",
            "status": "Active",
            "purchase_date": "2023-02-14",
            "value": "450000.00"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.assigned_to, None);
        assert_eq!(asset.field("serial_number"), Value::from("5CG1234XYZ"));
    }

    #[test]
    fn test_columns_render() {
        let row = asset("AST-001", "Computers", 450000);
        let columns = columns::<Asset>();
        let cells: Vec<Cell> = columns.iter().map(|c| c.cell(&row)).collect();

        assert_eq!(cells[4], Cell::Empty);
        assert_eq!(cells[6], Cell::badge("Active", Tone::Success));
        assert_eq!(cells[7], Cell::text("1 Mar 2023"));
        assert_eq!(cells[8], Cell::text("₦450,000.00"));
    }

    #[test]
    fn test_category_filter() {
        let rows = vec![
            asset("AST-001", "Computers", 1),
            asset("AST-002", "Furniture", 2),
            asset("AST-003", "Computers", 3),
        ];
        let engine = TableEngine::new(rows, columns(), filters());
        engine.set_filter("category", "computers");
        engine.toggle_sort("value");
        engine.toggle_sort("value");

        let ids: Vec<String> = engine.view().rows().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec!["AST-003", "AST-001"]);
    }
}
