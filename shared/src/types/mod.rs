//! Common type definitions shared across server crates

pub mod pagination;
pub mod response;
