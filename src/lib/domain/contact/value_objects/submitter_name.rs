//! Submitter name

use std::fmt;

use thiserror::Error;

/// An error that can occur when creating a submitter name
#[derive(Debug, Error)]
pub enum SubmitterNameError {
    /// The name is empty
    #[error("name is empty")]
    EmptyName,
}

/// The display name a visitor signed the contact form with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Create a new submitter name, trimming surrounding whitespace
    pub fn new(raw: &str) -> Result<Self, SubmitterNameError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SubmitterNameError::EmptyName);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for SubmitterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SubmitterName> for String {
    fn from(name: SubmitterName) -> Self {
        name.0
    }
}
