use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_name::ContactName;

/// A name and an email that both passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactDetails {
    pub name: ContactName,
    pub email: ContactEmail,
}
