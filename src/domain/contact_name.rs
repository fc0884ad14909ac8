use std::convert::TryFrom;
use std::fmt;

use crate::domain::errors::MalformedInput;

#[derive(Clone, Debug, PartialEq)]
pub struct ContactName(String);

impl TryFrom<String> for ContactName {
    type Error = MalformedInput;

    /// Trims the raw input and keeps the trimmed value.
    fn try_from(name: String) -> Result<Self, Self::Error> {
        let name = name.trim();
        if name.is_empty() {
            Err(MalformedInput::EmptyName)
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
