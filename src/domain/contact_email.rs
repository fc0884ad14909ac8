use std::convert::TryFrom;
use std::fmt;

use crate::domain::errors::MalformedInput;

const REQUIRED_EMAIL_CHAR: char = '@';

/// An email address that is non-empty and contains an `@`.
///
/// No further structure is checked: `"@"` on its own is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactEmail(String);

impl TryFrom<String> for ContactEmail {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        let email = email.trim();
        if email.is_empty() {
            Err(MalformedInput::EmptyEmail)
        } else if !email.contains(REQUIRED_EMAIL_CHAR) {
            Err(MalformedInput::InvalidEmailFormat {
                email: email.to_string(),
            })
        } else {
            Ok(Self(email.to_string()))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
