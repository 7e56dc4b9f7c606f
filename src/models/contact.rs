//! Contact model representing a person's name, phone, and address.

use crate::domain::require;
use crate::domain::rules::{ADDRESS, CONTACT_ID, FIRST_NAME, LAST_NAME, PHONE};
use crate::error::{RecordError, RecordResult};
use crate::repositories::Record;
use serde::{Deserialize, Serialize};

/// A contact record.
///
/// Every field is required and non-empty. The phone is exactly ten ASCII
/// digits. `contact_id` never changes after construction; the other fields
/// change only through setters that re-run the constructor's checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactFields")]
pub struct Contact {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

/// Unvalidated wire shape of a contact. Any field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub contact_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use record_services::Contact;
    ///
    /// let contact = Contact::new("ID1", "John", "Smith", "1234567890", "123 Main St").unwrap();
    /// assert_eq!(contact.first_name(), "John");
    /// assert!(Contact::new("ID1", "John", "Smith", "555-1234", "123 Main St").is_err());
    /// ```
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> RecordResult<Self> {
        Ok(Self {
            contact_id: CONTACT_ID.accept(contact_id)?,
            first_name: FIRST_NAME.accept(first_name)?,
            last_name: LAST_NAME.accept(last_name)?,
            phone: PHONE.accept(phone)?,
            address: ADDRESS.accept(address)?,
        })
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replace the first name. On error the contact is unchanged.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> RecordResult<()> {
        self.first_name = FIRST_NAME.accept(first_name)?;
        Ok(())
    }

    /// Replace the last name. On error the contact is unchanged.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> RecordResult<()> {
        self.last_name = LAST_NAME.accept(last_name)?;
        Ok(())
    }

    /// Replace the phone number. On error the contact is unchanged.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> RecordResult<()> {
        self.phone = PHONE.accept(phone)?;
        Ok(())
    }

    /// Replace the address. On error the contact is unchanged.
    pub fn set_address(&mut self, address: impl Into<String>) -> RecordResult<()> {
        self.address = ADDRESS.accept(address)?;
        Ok(())
    }
}

impl TryFrom<ContactFields> for Contact {
    type Error = RecordError;

    fn try_from(fields: ContactFields) -> RecordResult<Self> {
        Contact::new(
            require(CONTACT_ID.field, fields.contact_id)?,
            require(FIRST_NAME.field, fields.first_name)?,
            require(LAST_NAME.field, fields.last_name)?,
            require(PHONE.field, fields.phone)?,
            require(ADDRESS.field, fields.address)?,
        )
    }
}

impl Record for Contact {
    const KIND: &'static str = "contact";
    const ID_FIELD: &'static str = "contact_id";

    fn id(&self) -> &str {
        &self.contact_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new("ID1", "John", "Smith", "1234567890", "123 Main St").unwrap()
    }

    #[test]
    fn test_contact_valid() {
        let contact = sample();
        assert_eq!(contact.contact_id(), "ID1");
        assert_eq!(contact.first_name(), "John");
        assert_eq!(contact.last_name(), "Smith");
        assert_eq!(contact.phone(), "1234567890");
        assert_eq!(contact.address(), "123 Main St");
    }

    #[test]
    fn test_contact_boundary_lengths() {
        assert!(Contact::new(
            "1234567890",
            "Jonathanxx",
            "Smithsonia",
            "1234567890",
            "a".repeat(30)
        )
        .is_ok());
        assert!(Contact::new("12345678901", "John", "Smith", "1234567890", "addr").is_err());
        assert!(Contact::new("ID1", "Jonathanxxx", "Smith", "1234567890", "addr").is_err());
        assert!(Contact::new("ID1", "John", "Smithsonian", "1234567890", "addr").is_err());
        assert!(Contact::new("ID1", "John", "Smith", "1234567890", "a".repeat(31)).is_err());
    }

    #[test]
    fn test_contact_rejects_empty_fields() {
        assert_eq!(
            Contact::new("", "John", "Smith", "1234567890", "addr"),
            Err(RecordError::Empty {
                field: "contact_id"
            })
        );
        assert_eq!(
            Contact::new("ID1", "", "Smith", "1234567890", "addr"),
            Err(RecordError::Empty {
                field: "first_name"
            })
        );
        assert!(Contact::new("ID1", "John", "", "1234567890", "addr").is_err());
        assert!(Contact::new("ID1", "John", "Smith", "", "addr").is_err());
        assert!(Contact::new("ID1", "John", "Smith", "1234567890", "").is_err());
    }

    #[test]
    fn test_contact_phone_rules() {
        assert_eq!(
            Contact::new("ID1", "John", "Smith", "123456789", "addr"),
            Err(RecordError::NotDigits {
                field: "phone",
                len: 10
            })
        );
        assert!(Contact::new("ID1", "John", "Smith", "12345678901", "addr").is_err());
        assert!(Contact::new("ID1", "John", "Smith", "(123)45678", "addr").is_err());
    }

    #[test]
    fn test_setters_apply_valid_values() {
        let mut contact = sample();
        contact.set_first_name("Jane").unwrap();
        contact.set_last_name("Doe").unwrap();
        contact.set_phone("0987654321").unwrap();
        contact.set_address("456 Oak Ave").unwrap();

        assert_eq!(contact.contact_id(), "ID1");
        assert_eq!(contact.first_name(), "Jane");
        assert_eq!(contact.last_name(), "Doe");
        assert_eq!(contact.phone(), "0987654321");
        assert_eq!(contact.address(), "456 Oak Ave");
    }

    #[test]
    fn test_failed_setter_leaves_contact_unchanged() {
        let mut contact = sample();
        let before = contact.clone();

        assert!(contact.set_first_name("").is_err());
        assert!(contact.set_last_name("x".repeat(11)).is_err());
        assert!(contact.set_phone("BADPHONE").is_err());
        assert!(contact.set_address("x".repeat(31)).is_err());

        assert_eq!(contact, before);
    }

    #[test]
    fn test_contact_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["contact_id"], "ID1");
        assert_eq!(json["phone"], "1234567890");
    }

    #[test]
    fn test_contact_wire_names_are_snake_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["first_name"], "John");
        assert_eq!(json["last_name"], "Smith");
        assert!(json.get("firstName").is_none());

        let result: Result<Contact, _> = serde_json::from_str(
            r#"{"contactId":"ID1","firstName":"John","lastName":"Smith","phone":"1234567890","address":"x"}"#,
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("contact_id must not be null"));
    }

    #[test]
    fn test_contact_deserialization_validates() {
        let contact: Contact = serde_json::from_str(
            r#"{"contact_id":"ID1","first_name":"John","last_name":"Smith","phone":"1234567890","address":"123 Main St"}"#,
        )
        .unwrap();
        assert_eq!(contact, sample());

        let result: Result<Contact, _> = serde_json::from_str(
            r#"{"contact_id":"ID1","first_name":"John","last_name":"Smith","phone":"555","address":"x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_deserialization_missing_field() {
        let fields = ContactFields {
            contact_id: Some("ID1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Contact::try_from(fields),
            Err(RecordError::Missing {
                field: "first_name"
            })
        );
    }
}
