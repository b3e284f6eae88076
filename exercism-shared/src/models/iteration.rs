/// Iteration model and database operations
///
/// An iteration is one submitted revision of a solution. Iteration IDs are
/// sequential, so they break ties between iterations created in the same
/// instant.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE iterations (
///     id BIGSERIAL PRIMARY KEY,
///     solution_id UUID NOT NULL REFERENCES solutions(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// One revision of a solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Iteration {
    /// Sequential iteration ID
    pub id: i64,

    /// Owning solution
    pub solution_id: Uuid,

    /// Submission time
    pub created_at: DateTime<Utc>,
}

impl Iteration {
    /// Returns the most recently created iteration
    ///
    /// Ordered by `created_at`, then by `id`. Returns `None` for an empty slice.
    pub fn latest(iterations: &[Iteration]) -> Option<&Iteration> {
        iterations
            .iter()
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
    }

    /// Records a new iteration
    ///
    /// `created_at` defaults to the database's `NOW()` when `None`.
    pub async fn create(
        pool: &PgPool,
        solution_id: Uuid,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, sqlx::Error> {
        let iteration = sqlx::query_as::<_, Iteration>(
            r#"
            INSERT INTO iterations (solution_id, created_at)
            VALUES ($1, COALESCE($2, NOW()))
            RETURNING id, solution_id, created_at
            "#,
        )
        .bind(solution_id)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(iteration)
    }

    /// Lists a solution's iterations, oldest first
    pub async fn list_by_solution(pool: &PgPool, solution_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let iterations = sqlx::query_as::<_, Iteration>(
            r#"
            SELECT id, solution_id, created_at
            FROM iterations
            WHERE solution_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(solution_id)
        .fetch_all(pool)
        .await?;

        Ok(iterations)
    }
}
