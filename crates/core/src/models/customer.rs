//! Customer model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The person a booking is made for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    contact_number: String,
}

impl Customer {
    /// Create a customer. The name must not be blank.
    pub fn new(name: impl Into<String>, contact_number: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput("customer name must not be empty".into()));
        }

        Ok(Self {
            name,
            contact_number: contact_number.into().trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }
}
