//! Employee self-registration
//!
//! Employees register for portal access with their IPPIS number; an admin
//! then approves or rejects each pending registration from the
//! registrations screen.

mod service;

pub use service::*;

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{Row, Value};

/// Review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(RegistrationStatus::Pending),
            "approved" => Some(RegistrationStatus::Approved),
            "rejected" => Some(RegistrationStatus::Rejected),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Approved => "Approved",
            RegistrationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data an employee submits to register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub ippis_number: String,
    pub ministry: String,
    pub role: String,
}

/// A stored registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub ippis_number: String,
    pub ministry: String,
    pub role: String,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Registration {
    /// Creates a pending registration from a request.
    ///
    /// Fields are stored trimmed; the request is not validated here.
    pub fn from_request(request: RegistrationRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: request.full_name.trim().to_string(),
            email: request.email.trim().to_string(),
            ippis_number: request.ippis_number.trim().to_string(),
            ministry: request.ministry.trim().to_string(),
            role: request.role.trim().to_string(),
            status: RegistrationStatus::Pending,
            created_at: Utc::now(),
            rejection_reason: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RegistrationStatus::Pending
    }
}

impl Row for Registration {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id.to_string()),
            "full_name" => Value::from(&self.full_name),
            "email" => Value::from(&self.email),
            "ippis_number" => Value::from(&self.ippis_number),
            "ministry" => Value::from(&self.ministry),
            "role" => Value::from(&self.role),
            "status" => Value::from(self.status.label()),
            "created_at" => Value::from(self.created_at),
            "rejection_reason" => Value::from(self.rejection_reason.clone()),
            _ => Value::Null,
        }
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.full_name),
            Value::from(&self.email),
            Value::from(&self.ippis_number),
            Value::from(&self.ministry),
            Value::from(&self.role),
            Value::from(self.status.label()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(RegistrationStatus::parse(" Approved "), Some(RegistrationStatus::Approved));
        assert_eq!(RegistrationStatus::parse("on hold"), None);
        assert_eq!(RegistrationStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_request_json_is_camel_case() {
        let request: RegistrationRequest = serde_json::from_str(
            r#"{"fullName":"Amina Bello","email":"amina@fmf.gov.ng","ippisNumber":"104233","ministry":"Finance","role":"Officer"}"#,
        )
        .unwrap();
        assert_eq!(request.ippis_number, "104233");
    }

    #[test]
    fn test_row_fields() {
        let registration = Registration::from_request(RegistrationRequest {
            full_name: " Amina Bello ".into(),
            email: "amina@fmf.gov.ng".into(),
            ippis_number: "104233".into(),
            ministry: "Finance".into(),
            role: "Officer".into(),
        });
        assert!(registration.is_pending());
        assert_eq!(registration.field("full_name"), Value::from("Amina Bello"));
        assert_eq!(registration.field("status"), Value::from("Pending"));
        assert_eq!(registration.field("rejection_reason"), Value::Null);
        assert_eq!(registration.field("salary"), Value::Null);
    }
}
