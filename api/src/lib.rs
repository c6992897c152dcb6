//! HTTP API layer for the Worklog backend
//!
//! Library exports for testing and external use.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
