//! Response handlers and error mapping

pub mod error;

pub use error::{handle_domain_error, validation_error_response};
