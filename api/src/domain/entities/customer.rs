//! Customer domain entity
//!
//! A pet owner registered at the shop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{normalize_optional, require_text, MAX_NAME_LEN};
use crate::error::DomainError;

pub const MAX_EMAIL_LEN: usize = 256;
pub const MAX_PHONE_LEN: usize = 32;

/// Unique identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered customer
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new customer
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Trim every field, drop blank optionals and check the column limits.
    pub fn normalized(self) -> Result<Self, DomainError> {
        let name = require_text("name", &self.name, MAX_NAME_LEN)?;
        let email = require_text("email", &self.email, MAX_EMAIL_LEN)?;
        if !is_valid_email(&email) {
            return Err(DomainError::Validation(format!(
                "email '{}' is not a valid address",
                email
            )));
        }
        let phone = normalize_optional("phone", self.phone, MAX_PHONE_LEN)?;

        Ok(Self { name, email, phone })
    }
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
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
