/// Solution URL building
///
/// The responder never formats URLs itself. It asks an injected
/// [`SolutionRoutes`] implementation for one of three named routes:
///
/// | Route                          | Path                                                  |
/// |--------------------------------|-------------------------------------------------------|
/// | `my_solution_url`              | `/my/solutions/{uuid}`                                |
/// | `track_exercise_solution_url`  | `/tracks/{track}/exercises/{exercise}/solutions/{uuid}` |
/// | `mentor_solution_url`          | `/mentor/solutions/{uuid}`                            |
///
/// # Example
///
/// ```
/// use exercism_shared::routes::{SiteRoutes, SolutionRoutes};
/// use uuid::Uuid;
///
/// let routes = SiteRoutes::new("https://exercism.io/");
/// let id = Uuid::nil();
/// assert_eq!(
///     routes.my_solution_url(id),
///     format!("https://exercism.io/my/solutions/{}", id),
/// );
/// ```

use uuid::Uuid;

/// Default site base URL
pub const DEFAULT_BASE_URL: &str = "https://exercism.io";

/// Named routes for solution pages
pub trait SolutionRoutes: Send + Sync {
    /// Owner-scoped private view
    fn my_solution_url(&self, solution_id: Uuid) -> String;

    /// Public view of a published solution
    fn track_exercise_solution_url(
        &self,
        track_slug: &str,
        exercise_slug: &str,
        solution_id: Uuid,
    ) -> String;

    /// Mentor-scoped view of an in-review solution
    fn mentor_solution_url(&self, solution_id: Uuid) -> String;
}

/// Absolute URLs rooted at the public site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoutes {
    base_url: String,
}

impl SiteRoutes {
    /// Creates routes rooted at `base_url` (trailing slashes are dropped)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SiteRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SolutionRoutes for SiteRoutes {
    fn my_solution_url(&self, solution_id: Uuid) -> String {
        format!("{}/my/solutions/{}", self.base_url, solution_id)
    }

    fn track_exercise_solution_url(
        &self,
        track_slug: &str,
        exercise_slug: &str,
        solution_id: Uuid,
    ) -> String {
        format!(
            "{}/tracks/{}/exercises/{}/solutions/{}",
            self.base_url, track_slug, exercise_slug, solution_id
        )
    }

    fn mentor_solution_url(&self, solution_id: Uuid) -> String {
        format!("{}/mentor/solutions/{}", self.base_url, solution_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(SiteRoutes::default().base_url(), "https://exercism.io");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(SiteRoutes::new("http://localhost:3000//").base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_named_routes() {
        let routes = SiteRoutes::default();
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();

        assert_eq!(
            routes.my_solution_url(id),
            "https://exercism.io/my/solutions/550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(
            routes.mentor_solution_url(id),
            "https://exercism.io/mentor/solutions/550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(
            routes.track_exercise_solution_url("ruby", "hello-world", id),
            "https://exercism.io/tracks/ruby/exercises/hello-world/solutions/550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
