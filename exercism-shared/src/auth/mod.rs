/// Requester authentication
///
/// Exercism issues identity tokens elsewhere; this crate only validates them
/// and turns them into a [`Requester`].
///
/// # Modules
///
/// - [`token`]: HS256 JWT validation
/// - [`requester`]: the identity handed to responders

pub mod requester;
pub mod token;

pub use requester::Requester;
