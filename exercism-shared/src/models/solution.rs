/// Solution model and database operations
///
/// A solution is a user's submitted code for one exercise. Its UUID is the
/// public identifier used in every solution URL.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE solutions (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     exercise_id UUID NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
///     published_at TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Publication
///
/// A solution is published once `published_at` is set and no longer in the
/// future. See [`Solution::is_published`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A user's solution to an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Solution {
    /// Public solution UUID
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Exercise being solved
    pub exercise_id: Uuid,

    /// When the solution was published (None while unpublished)
    pub published_at: Option<DateTime<Utc>>,

    /// When the solution was started
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSolution {
    pub user_id: Uuid,
    pub exercise_id: Uuid,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Solution {
    /// Whether the solution is published as of `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        matches!(self.published_at, Some(at) if at <= now)
    }

    /// Whether `user_id` owns this solution
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Creates a new solution
    ///
    /// # Errors
    ///
    /// Returns an error if the user or exercise doesn't exist, or the
    /// database connection fails.
    pub async fn create(pool: &PgPool, data: CreateSolution) -> Result<Self, sqlx::Error> {
        let solution = sqlx::query_as::<_, Solution>(
            r#"
            INSERT INTO solutions (user_id, exercise_id, published_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, exercise_id, published_at, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.exercise_id)
        .bind(data.published_at)
        .fetch_one(pool)
        .await?;

        Ok(solution)
    }

    /// Finds a solution by its UUID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let solution = sqlx::query_as::<_, Solution>(
            r#"
            SELECT id, user_id, exercise_id, published_at, created_at
            FROM solutions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn solution(published_at: Option<DateTime<Utc>>) -> Solution {
        Solution {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            published_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unpublished_without_timestamp() {
        assert!(!solution(None).is_published(Utc::now()));
    }

    #[test]
    fn test_published_in_the_past() {
        let now = Utc::now();
        assert!(solution(Some(now - Duration::weeks(1))).is_published(now));
        assert!(solution(Some(now)).is_published(now));
    }

    #[test]
    fn test_not_published_when_scheduled() {
        let now = Utc::now();
        assert!(!solution(Some(now + Duration::minutes(1))).is_published(now));
    }

    #[test]
    fn test_is_owned_by() {
        let s = solution(None);
        assert!(s.is_owned_by(s.user_id));
        assert!(!s.is_owned_by(Uuid::new_v4()));
    }
}
