/// Read-only data access for the API
///
/// Handlers and the solution responder never traverse model associations
/// lazily. Instead a [`Store`] loads everything a request needs up front and
/// hands back plain data:
///
/// - [`SolutionSnapshot`]: a solution with its owner, exercise, track, the
///   owner's membership on that track, and its iterations
/// - [`BlogPost`] lists and lookups filtered by publication time
///
/// # Implementations
///
/// - [`postgres::PgStore`]: backed by sqlx and the model query functions
/// - [`memory::MemoryStore`]: in-process maps, for tests and local tooling
///
/// # Example
///
/// ```no_run
/// use exercism_shared::store::{Store, postgres::PgStore};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let store = PgStore::new(pool);
/// if let Some(snapshot) = store.load_solution(id).await? {
///     println!("{} solved {}", snapshot.owner.handle, snapshot.exercise.slug);
/// }
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    blog_post::BlogPost, exercise::Exercise, iteration::Iteration, solution::Solution,
    track::Track, user::User, user_track::UserTrack,
};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row referenced by a loaded record does not exist
    #[error("{entity} {id} not found")]
    MissingAssociation { entity: &'static str, id: Uuid },
}

impl StoreError {
    pub fn missing(entity: &'static str, id: Uuid) -> Self {
        Self::MissingAssociation { entity, id }
    }
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything needed to present a solution, loaded eagerly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSnapshot {
    pub solution: Solution,

    /// Solution owner
    pub owner: User,

    pub exercise: Exercise,

    /// Track of the exercise
    pub track: Track,

    /// Owner's membership on the track, if any
    pub membership: Option<UserTrack>,

    /// All iterations of the solution, in no guaranteed order
    pub iterations: Vec<Iteration>,
}

/// Read-only repository used by the API
#[async_trait]
pub trait Store: Send + Sync {
    /// Verifies the backing storage is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Loads a solution and its associations
    ///
    /// Returns `Ok(None)` when the solution doesn't exist, and
    /// [`StoreError::MissingAssociation`] when it exists but a required
    /// association (owner, exercise, track) does not.
    async fn load_solution(&self, id: Uuid) -> StoreResult<Option<SolutionSnapshot>>;

    /// Lists posts published as of `now`, newest first
    async fn published_blog_posts(&self, now: DateTime<Utc>) -> StoreResult<Vec<BlogPost>>;

    /// Finds a post by slug if it is published as of `now`
    async fn find_published_blog_post(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<BlogPost>>;
}
