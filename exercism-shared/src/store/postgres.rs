/// Postgres-backed [`Store`]
///
/// Builds snapshots by composing the per-model query functions, one query
/// per association.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{SolutionSnapshot, Store, StoreError, StoreResult};
use crate::db::pool::health_check;
use crate::models::{
    blog_post::BlogPost, exercise::Exercise, iteration::Iteration, solution::Solution,
    track::Track, user::User, user_track::UserTrack,
};

/// Store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }

    async fn load_solution(&self, id: Uuid) -> StoreResult<Option<SolutionSnapshot>> {
        debug!(solution_id = %id, "Loading solution snapshot");

        let Some(solution) = Solution::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };

        let owner = User::find_by_id(&self.pool, solution.user_id)
            .await?
            .ok_or_else(|| StoreError::missing("user", solution.user_id))?;

        let exercise = Exercise::find_by_id(&self.pool, solution.exercise_id)
            .await?
            .ok_or_else(|| StoreError::missing("exercise", solution.exercise_id))?;

        let track = Track::find_by_id(&self.pool, exercise.track_id)
            .await?
            .ok_or_else(|| StoreError::missing("track", exercise.track_id))?;

        let membership = UserTrack::find(&self.pool, owner.id, track.id).await?;
        let iterations = Iteration::list_by_solution(&self.pool, solution.id).await?;

        Ok(Some(SolutionSnapshot {
            solution,
            owner,
            exercise,
            track,
            membership,
            iterations,
        }))
    }

    async fn published_blog_posts(&self, now: DateTime<Utc>) -> StoreResult<Vec<BlogPost>> {
        Ok(BlogPost::list_published(&self.pool, now).await?)
    }

    async fn find_published_blog_post(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<BlogPost>> {
        Ok(BlogPost::find_published_by_slug(&self.pool, slug, now).await?)
    }
}
