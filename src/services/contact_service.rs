//! Contact service layer.
//!
//! Add, delete, update, and look up contacts held in memory.

use crate::error::RecordResult;
use crate::models::Contact;
use crate::repositories::{InMemoryRepository, Record};
use serde::Deserialize;
use tracing::{debug, warn};

/// Fields to change on an existing contact. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Identity-keyed store of contacts.
#[derive(Debug, Default)]
pub struct ContactService {
    contacts: InMemoryRepository<Contact>,
}

impl ContactService {
    /// Create an empty contact service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new contact.
    ///
    /// # Errors
    ///
    /// Fails if a contact with the same id is already stored.
    pub fn add(&mut self, contact: Contact) -> RecordResult<()> {
        let id = contact.id().to_string();
        self.contacts
            .insert(contact)
            .inspect(|_| debug!(contact_id = %id, "Contact added"))
            .inspect_err(|e| warn!(contact_id = %id, error = %e, "Contact rejected"))
    }

    /// Remove the contact with this id.
    ///
    /// # Errors
    ///
    /// Fails if no such contact is stored.
    pub fn delete(&mut self, contact_id: &str) -> RecordResult<()> {
        self.contacts
            .remove(contact_id)
            .map(|_| debug!(contact_id, "Contact deleted"))
            .inspect_err(|e| warn!(contact_id, error = %e, "Contact delete rejected"))
    }

    /// Apply a partial update.
    ///
    /// Fields are applied in order: first name, last name, phone, address.
    /// The first invalid value stops the update with an error; fields before
    /// it keep their new values.
    ///
    /// # Errors
    ///
    /// Fails if the id is unknown or a provided value is invalid.
    pub fn update(&mut self, contact_id: &str, changes: ContactUpdate) -> RecordResult<()> {
        let contact = self
            .contacts
            .get_mut(contact_id)
            .inspect_err(|e| warn!(contact_id, error = %e, "Contact update rejected"))?;

        Self::apply(contact, changes)
            .inspect(|_| debug!(contact_id, "Contact updated"))
            .inspect_err(|e| warn!(contact_id, error = %e, "Contact update stopped"))
    }

    fn apply(contact: &mut Contact, changes: ContactUpdate) -> RecordResult<()> {
        if let Some(first_name) = changes.first_name {
            contact.set_first_name(first_name)?;
        }
        if let Some(last_name) = changes.last_name {
            contact.set_last_name(last_name)?;
        }
        if let Some(phone) = changes.phone {
            contact.set_phone(phone)?;
        }
        if let Some(address) = changes.address {
            contact.set_address(address)?;
        }
        Ok(())
    }

    /// Look up a contact. An unknown id yields `None`.
    pub fn get(&self, contact_id: &str) -> Option<&Contact> {
        self.contacts.get(contact_id)
    }

    /// All contacts, ordered by id.
    pub fn list(&self) -> Vec<&Contact> {
        self.contacts.sorted()
    }

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }
}
