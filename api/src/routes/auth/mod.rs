//! Authentication endpoints
//!
//! - `POST /api/v1/auth/login`: credential verification and token issuance
//! - `POST /api/v1/auth/refresh`: refresh token exchange
//!
//! Both endpoints sit behind a per-client-IP rate limit.

pub mod login;
pub mod refresh;

use actix_web::HttpRequest;

pub use login::login;
pub use refresh::refresh;

/// Resolve the client IP used as the rate limiting key
///
/// Prefers the forwarded address when a reverse proxy sets one, then the
/// peer address. Requests with no resolvable address share one fixed
/// bucket instead of bypassing the limit.
pub(crate) fn client_ip(req: &HttpRequest) -> String {
    let connection_info = req.connection_info();
    connection_info
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .or_else(|| req.peer_addr().map(|peer| peer.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
