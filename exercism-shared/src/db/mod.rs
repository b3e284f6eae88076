/// Database layer
///
/// - `pool`: PostgreSQL connection pool with a startup health check
/// - `migrations`: embedded sqlx migrations from `migrations/`
///
/// Models live in [`crate::models`]; request-time reads go through
/// [`crate::store`].

pub mod migrations;
pub mod pool;
