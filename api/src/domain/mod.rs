//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `pagination`: Offset/limit windows for list queries
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod pagination;
pub mod ports;
