//! In-memory registration service.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::info;
use uuid::Uuid;

use super::{Registration, RegistrationRequest, RegistrationStatus};
use crate::error::{FieldValidationError, RegistrationError, SubmitError};
use crate::source::RowSource;
use crate::submit::Submitter;

/// Stores registrations and enforces their uniqueness rules.
///
/// E-mail addresses (case-insensitive) and IPPIS numbers are unique across
/// all registrations, whatever their status. Removing a registration frees
/// both.
///
/// # Example
///
/// ```
/// use ippis_lib::registration::{RegistrationRequest, RegistrationService};
///
/// let service = RegistrationService::new();
/// let id = service
///     .register(RegistrationRequest {
///         full_name: "Amina Bello".into(),
///         email: "amina@fmf.gov.ng".into(),
///         ippis_number: "104233".into(),
///         ministry: "Finance".into(),
///         role: "Officer".into(),
///     })
///     .unwrap();
///
/// service.approve(id).unwrap();
/// assert!(service.find_by_email("AMINA@fmf.gov.ng").is_some());
/// ```
#[derive(Debug, Default)]
pub struct RegistrationService {
    registrations: RwLock<Vec<Registration>>,
    emails: DashMap<String, Uuid>,
    ippis_numbers: DashMap<String, Uuid>,
}

impl RegistrationService {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_all(&self) -> RwLockReadGuard<'_, Vec<Registration>> {
        self.registrations.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_all(&self) -> RwLockWriteGuard<'_, Vec<Registration>> {
        self.registrations.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.read_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates and stores a new pending registration.
    pub fn register(&self, request: RegistrationRequest) -> Result<Uuid, RegistrationError> {
        let errors = validate(&request);
        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }

        let registration = Registration::from_request(request);
        let id = registration.id;

        let email_key = registration.email.to_lowercase();
        match self.emails.entry(email_key.clone()) {
            Entry::Occupied(_) => return Err(RegistrationError::DuplicateEmail(registration.email)),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        match self.ippis_numbers.entry(registration.ippis_number.clone()) {
            Entry::Occupied(_) => {
                self.emails.remove(&email_key);
                return Err(RegistrationError::DuplicateIppisNumber(registration.ippis_number));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        info!(
            "Registered {} ({}) as {}",
            registration.full_name, registration.ippis_number, id
        );
        self.write_all().push(registration);
        Ok(id)
    }

    /// Get a registration by id.
    pub fn get(&self, id: Uuid) -> Option<Registration> {
        self.read_all().iter().find(|r| r.id == id).cloned()
    }

    /// Finds a registration by e-mail address, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Option<Registration> {
        let needle = email.trim().to_lowercase();
        self.read_all()
            .iter()
            .find(|r| r.email.to_lowercase() == needle)
            .cloned()
    }

    /// All registrations, oldest first.
    pub fn list(&self) -> Vec<Registration> {
        self.read_all().clone()
    }

    /// Registrations with the given status, oldest first.
    pub fn list_by_status(&self, status: RegistrationStatus) -> Vec<Registration> {
        self.read_all()
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    /// Approves a pending registration.
    pub fn approve(&self, id: Uuid) -> Result<Registration, RegistrationError> {
        let approved = self.review(id, |registration| {
            registration.status = RegistrationStatus::Approved;
        })?;
        info!("Approved registration {}", id);
        Ok(approved)
    }

    /// Rejects a pending registration. A reason is required.
    pub fn reject(&self, id: Uuid, reason: &str) -> Result<Registration, RegistrationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(RegistrationError::Invalid(vec![FieldValidationError::required("reason")]));
        }
        let rejected = self.review(id, |registration| {
            registration.status = RegistrationStatus::Rejected;
            registration.rejection_reason = Some(reason.to_string());
        })?;
        info!("Rejected registration {}: {}", id, reason);
        Ok(rejected)
    }

    fn review(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Registration),
    ) -> Result<Registration, RegistrationError> {
        let mut guard = self.write_all();
        let registration = guard
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RegistrationError::NotFound(id))?;
        if !registration.is_pending() {
            return Err(RegistrationError::NotPending {
                id,
                status: registration.status,
            });
        }
        apply(registration);
        Ok(registration.clone())
    }

    /// Removes a registration and frees its e-mail and IPPIS number.
    pub fn remove(&self, id: Uuid) -> Result<Registration, RegistrationError> {
        let mut guard = self.write_all();
        let index = guard
            .iter()
            .position(|r| r.id == id)
            .ok_or(RegistrationError::NotFound(id))?;
        let removed = guard.remove(index);
        drop(guard);

        self.emails.remove(&removed.email.to_lowercase());
        self.ippis_numbers.remove(&removed.ippis_number);
        info!("Removed registration {}", id);
        Ok(removed)
    }
}

/// Checks the request fields. Returns every problem found.
pub fn validate(request: &RegistrationRequest) -> Vec<FieldValidationError> {
    let mut errors = Vec::new();

    let required = [
        ("fullName", &request.full_name),
        ("email", &request.email),
        ("ippisNumber", &request.ippis_number),
        ("ministry", &request.ministry),
        ("role", &request.role),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldValidationError::required(field));
        }
    }

    let email = request.email.trim();
    if !email.is_empty() && !is_email(email) {
        errors.push(FieldValidationError::with_code(
            "email",
            "must be a valid e-mail address",
            "format",
        ));
    }

    let ippis = request.ippis_number.trim();
    if !ippis.is_empty() && !ippis.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldValidationError::with_code(
            "ippisNumber",
            "must contain digits only",
            "format",
        ));
    }

    errors
}

fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl RowSource<Registration> for RegistrationService {
    fn list(&self) -> Vec<Registration> {
        RegistrationService::list(self)
    }
}

#[async_trait]
impl Submitter<RegistrationRequest> for RegistrationService {
    type Id = Uuid;

    async fn submit(&self, data: RegistrationRequest) -> Result<Uuid, SubmitError> {
        Ok(self.register(data)?)
    }
}
