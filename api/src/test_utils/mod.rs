//! In-memory repositories and fixtures shared by the unit and HTTP tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
