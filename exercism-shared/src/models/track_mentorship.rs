/// TrackMentorship model
///
/// Grants a user mentor visibility over a track's solutions. URL resolution
/// for solutions does not consult this table: a mentor looking at an
/// unpublished solution lands on the mentor URL because they are not the
/// owner, not because of the mentorship row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE track_mentorships (
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     track_id UUID NOT NULL REFERENCES tracks(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (user_id, track_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrackMentorship {
    pub user_id: Uuid,
    pub track_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TrackMentorship {
    /// Makes a user a mentor on a track
    pub async fn create(pool: &PgPool, user_id: Uuid, track_id: Uuid) -> Result<Self, sqlx::Error> {
        let mentorship = sqlx::query_as::<_, TrackMentorship>(
            r#"
            INSERT INTO track_mentorships (user_id, track_id)
            VALUES ($1, $2)
            RETURNING user_id, track_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(track_id)
        .fetch_one(pool)
        .await?;

        Ok(mentorship)
    }
}
