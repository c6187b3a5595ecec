//! Offset/limit pagination shared by every list endpoint.

use serde::Deserialize;

use crate::error::DomainError;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 500;
/// Largest offset the database accepts (a signed 64-bit bind parameter)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// A window into an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    /// Build a page, clamping `limit` to `MAX_LIMIT`.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.min(MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}

/// `?skip=&limit=` query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default, alias = "offset")]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl TryFrom<PageQuery> for Page {
    type Error = DomainError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        if query.skip > MAX_OFFSET {
            return Err(DomainError::Validation(format!(
                "skip must be at most {}",
                MAX_OFFSET
            )));
        }
        Ok(Page::new(query.skip, query.limit))
    }
}
