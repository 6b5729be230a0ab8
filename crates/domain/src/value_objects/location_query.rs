//! Free-text location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A caller-supplied place name such as `"London"` or `"São Paulo"`
///
/// The only invariant is that the text contains something other than
/// whitespace. The original text is kept so it can be echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a new query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocation` if the text is empty or whitespace only
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyLocation);
        }
        Ok(Self(text))
    }

    /// The text exactly as the caller supplied it
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text sent to the geocoder, without surrounding whitespace
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}
