/// UserTrack model: a user's membership on a track
///
/// There is at most one membership per (user, track) pair. The membership
/// controls whether the user participates anonymously on the track, and if
/// so, which alias handle is shown in place of their global handle.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user_tracks (
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     track_id UUID NOT NULL REFERENCES tracks(id) ON DELETE CASCADE,
///     anonymous BOOLEAN NOT NULL DEFAULT FALSE,
///     handle VARCHAR(255),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (user_id, track_id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use exercism_shared::models::user_track::{UserTrack, CreateUserTrack};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, user_id: Uuid, track_id: Uuid) -> Result<(), sqlx::Error> {
/// UserTrack::create(&pool, CreateUserTrack {
///     user_id,
///     track_id,
///     anonymous: true,
///     handle: Some("foosa1111".to_string()),
/// }).await?;
///
/// if let Some(membership) = UserTrack::find(&pool, user_id, track_id).await? {
///     println!("alias: {:?}", membership.alias());
/// }
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Membership of a user on a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserTrack {
    /// Member user ID
    pub user_id: Uuid,

    /// Track ID
    pub track_id: Uuid,

    /// Whether the user is anonymous on this track
    pub anonymous: bool,

    /// Alias handle shown while anonymous
    pub handle: Option<String>,

    /// When the user joined the track
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserTrack {
    pub user_id: Uuid,
    pub track_id: Uuid,

    /// Defaults to false
    #[serde(default)]
    pub anonymous: bool,

    #[serde(default)]
    pub handle: Option<String>,
}

impl UserTrack {
    /// Alias handle to display instead of the user's global handle
    ///
    /// `None` when the membership is not anonymous, or is anonymous without
    /// an alias on record.
    pub fn alias(&self) -> Option<&str> {
        if self.anonymous {
            self.handle.as_deref()
        } else {
            None
        }
    }

    /// Creates a new membership (user joins track)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The membership already exists (primary key violation)
    /// - The user or track doesn't exist (foreign key violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUserTrack) -> Result<Self, sqlx::Error> {
        let membership = sqlx::query_as::<_, UserTrack>(
            r#"
            INSERT INTO user_tracks (user_id, track_id, anonymous, handle)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, track_id, anonymous, handle, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.track_id)
        .bind(data.anonymous)
        .bind(data.handle)
        .fetch_one(pool)
        .await?;

        Ok(membership)
    }

    /// Finds the membership for a (user, track) pair
    ///
    /// Returns `None` if the user has not joined the track.
    pub async fn find(
        pool: &PgPool,
        user_id: Uuid,
        track_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let membership = sqlx::query_as::<_, UserTrack>(
            r#"
            SELECT user_id, track_id, anonymous, handle, created_at
            FROM user_tracks
            WHERE user_id = $1 AND track_id = $2
            "#,
        )
        .bind(user_id)
        .bind(track_id)
        .fetch_optional(pool)
        .await?;

        Ok(membership)
    }
}
