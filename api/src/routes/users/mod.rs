//! User management endpoints
//!
//! All routes here require a valid access token. Listing and lookup are
//! restricted to managers and admins; creation to admins only. `/me`
//! returns the caller's own record regardless of role.

pub mod create;
pub mod get_by_id;
pub mod list;
pub mod me;

pub use create::create_user;
pub use get_by_id::get_user_by_id;
pub use list::list_users;
pub use me::current_user;
