/// Middleware for the API server
///
/// - `requester`: bearer-token validation, inserts the `Requester`
/// - `security`: security response headers

pub mod requester;
pub mod security;
