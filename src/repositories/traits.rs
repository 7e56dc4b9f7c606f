/// A record that can be kept in an identity-keyed repository.
///
/// The identity is fixed at construction, so a stored record can never drift
/// away from the key it was filed under.
pub trait Record {
    /// Human-readable kind, used for the "must not be null" record message.
    const KIND: &'static str;

    /// Name of the identity field, used in error messages.
    const ID_FIELD: &'static str;

    /// The record's identity.
    fn id(&self) -> &str;
}
