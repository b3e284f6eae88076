/// In-memory [`Store`]
///
/// Keeps every record in maps behind a single `RwLock`. The `add_*` helpers
/// take the same input types as the model `create` functions and fill in
/// IDs and timestamps the way the database would.
///
/// # Example
///
/// ```
/// use exercism_shared::models::solution::CreateSolution;
/// use exercism_shared::store::{Store, memory::MemoryStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let user = store.add_user("iHiD").await;
/// let track = store.add_track("ruby", "Ruby").await;
/// let exercise = store.add_exercise(track.id, "hello-world").await;
/// let solution = store
///     .add_solution(CreateSolution { user_id: user.id, exercise_id: exercise.id, published_at: None })
///     .await;
///
/// let snapshot = store.load_solution(solution.id).await?.unwrap();
/// assert_eq!(snapshot.track.slug, "ruby");
/// # Ok(())
/// # }
/// ```

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{SolutionSnapshot, Store, StoreError, StoreResult};
use crate::models::{
    blog_post::{BlogPost, CreateBlogPost},
    exercise::Exercise,
    iteration::Iteration,
    solution::{CreateSolution, Solution},
    track::Track,
    track_mentorship::TrackMentorship,
    user::User,
    user_track::{CreateUserTrack, UserTrack},
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    tracks: HashMap<Uuid, Track>,
    exercises: HashMap<Uuid, Exercise>,
    user_tracks: HashMap<(Uuid, Uuid), UserTrack>,
    mentorships: HashMap<(Uuid, Uuid), TrackMentorship>,
    solutions: HashMap<Uuid, Solution>,
    iterations: Vec<Iteration>,
    blog_posts: Vec<BlogPost>,
    next_iteration_id: i64,
}

/// Store holding all records in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, handle: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            handle: handle.to_string(),
            created_at: Utc::now(),
        };
        self.tables.write().await.users.insert(user.id, user.clone());
        user
    }

    pub async fn add_track(&self, slug: &str, title: &str) -> Track {
        let track = Track {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        };
        self.tables.write().await.tracks.insert(track.id, track.clone());
        track
    }

    pub async fn add_exercise(&self, track_id: Uuid, slug: &str) -> Exercise {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            track_id,
            slug: slug.to_string(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .exercises
            .insert(exercise.id, exercise.clone());
        exercise
    }

    /// Adds or replaces the membership for (user, track)
    pub async fn add_user_track(&self, data: CreateUserTrack) -> UserTrack {
        let membership = UserTrack {
            user_id: data.user_id,
            track_id: data.track_id,
            anonymous: data.anonymous,
            handle: data.handle,
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .user_tracks
            .insert((membership.user_id, membership.track_id), membership.clone());
        membership
    }

    pub async fn add_mentorship(&self, user_id: Uuid, track_id: Uuid) -> TrackMentorship {
        let mentorship = TrackMentorship {
            user_id,
            track_id,
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .mentorships
            .insert((user_id, track_id), mentorship.clone());
        mentorship
    }

    pub async fn add_solution(&self, data: CreateSolution) -> Solution {
        let solution = Solution {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            exercise_id: data.exercise_id,
            published_at: data.published_at,
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .solutions
            .insert(solution.id, solution.clone());
        solution
    }

    /// Records an iteration with the next sequential ID
    ///
    /// `created_at` defaults to now.
    pub async fn add_iteration(
        &self,
        solution_id: Uuid,
        created_at: Option<DateTime<Utc>>,
    ) -> Iteration {
        let mut tables = self.tables.write().await;
        tables.next_iteration_id += 1;

        let iteration = Iteration {
            id: tables.next_iteration_id,
            solution_id,
            created_at: created_at.unwrap_or_else(Utc::now),
        };
        tables.iterations.push(iteration.clone());
        iteration
    }

    /// Adds a blog post, replacing any post with the same slug
    pub async fn add_blog_post(&self, data: CreateBlogPost) -> BlogPost {
        let post = BlogPost {
            id: Uuid::new_v4(),
            slug: data.slug,
            title: data.title,
            content: data.content,
            published_at: data.published_at,
            created_at: Utc::now(),
        };
        let mut tables = self.tables.write().await;
        tables.blog_posts.retain(|existing| existing.slug != post.slug);
        tables.blog_posts.push(post.clone());
        post
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn load_solution(&self, id: Uuid) -> StoreResult<Option<SolutionSnapshot>> {
        let tables = self.tables.read().await;

        let Some(solution) = tables.solutions.get(&id).cloned() else {
            return Ok(None);
        };

        let owner = tables
            .users
            .get(&solution.user_id)
            .cloned()
            .ok_or_else(|| StoreError::missing("user", solution.user_id))?;

        let exercise = tables
            .exercises
            .get(&solution.exercise_id)
            .cloned()
            .ok_or_else(|| StoreError::missing("exercise", solution.exercise_id))?;

        let track = tables
            .tracks
            .get(&exercise.track_id)
            .cloned()
            .ok_or_else(|| StoreError::missing("track", exercise.track_id))?;

        let membership = tables.user_tracks.get(&(owner.id, track.id)).cloned();

        let iterations = tables
            .iterations
            .iter()
            .filter(|i| i.solution_id == solution.id)
            .cloned()
            .collect();

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
        let tables = self.tables.read().await;

        let mut posts: Vec<BlogPost> = tables
            .blog_posts
            .iter()
            .filter(|post| post.is_published(now))
            .cloned()
            .collect();

        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(posts)
    }

    async fn find_published_blog_post(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<BlogPost>> {
        let tables = self.tables.read().await;

        Ok(tables
            .blog_posts
            .iter()
            .find(|post| post.slug == slug && post.is_published(now))
            .cloned())
    }
}
