//! # Worklog Core
//!
//! Core business logic and domain layer for the Worklog backend.
//!
//! This crate contains the domain entities, repository traits, and the
//! authentication, token, and user services. It has no knowledge of the
//! HTTP layer or of any concrete database; those live in the `api` and
//! `infra` crates respectively.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult};
