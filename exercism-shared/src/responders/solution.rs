/// Solution responder
///
/// Turns a [`SolutionSnapshot`] into the JSON record shown to a requester.
///
/// # Output
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "url": "https://exercism.io/my/solutions/550e8400-e29b-41d4-a716-446655440000",
///   "owner": { "handle": "iHiD", "is_requester": true },
///   "exercise": {
///     "id": "hello-world",
///     "instructions_url": "https://exercism.io/my/solutions/550e8400-e29b-41d4-a716-446655440000",
///     "track": { "id": "ruby" }
///   },
///   "files": [],
///   "iteration": { "submitted_at": "2024-01-04T12:00:00Z" }
/// }
/// ```
///
/// # URL rules
///
/// First match wins:
/// 1. Requester owns the solution: `my_solution_url`
/// 2. Solution is published: `track_exercise_solution_url`
/// 3. Otherwise: `mentor_solution_url`
///
/// Mentorship is never looked up. A mentor viewing a published solution gets
/// the public URL like anyone else.
///
/// `instructions_url` is always `my_solution_url`, whoever is asking.
/// Non-owners therefore receive a link to a page scoped to the owner. This
/// matches the behavior clients already depend on and is kept as is.
///
/// # Example
///
/// ```no_run
/// use exercism_shared::auth::Requester;
/// use exercism_shared::responders::solution::SolutionResponder;
/// use exercism_shared::routes::SiteRoutes;
/// use exercism_shared::store::SolutionSnapshot;
/// use chrono::Utc;
///
/// # fn example(snapshot: SolutionSnapshot, requester: Requester) -> Result<(), Box<dyn std::error::Error>> {
/// let routes = SiteRoutes::default();
/// let record = SolutionResponder::new(&snapshot, &requester, &routes).render(Utc::now())?;
/// println!("{}", serde_json::to_string_pretty(&record)?);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::Requester;
use crate::models::iteration::Iteration;
use crate::routes::SolutionRoutes;
use crate::store::SolutionSnapshot;

/// Error type for rendering a solution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponderError {
    /// The owner has no membership on the exercise's track
    #[error("No membership for user {user_id} on track {track_id}")]
    MembershipNotFound { user_id: Uuid, track_id: Uuid },
}

/// `{ "solution": ... }` envelope returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionEnvelope {
    pub solution: PresentationRecord,
}

/// Solution as presented to a requester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    /// Solution UUID
    pub id: Uuid,

    /// URL visible to the requester
    pub url: String,

    pub owner: OwnerSummary,

    pub exercise: ExerciseSummary,

    /// Always empty; solution files are not exposed yet
    pub files: Vec<serde_json::Value>,

    /// Latest iteration, or null when nothing has been submitted
    pub iteration: Option<IterationSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    /// Handle shown for the owner on this track
    pub handle: String,

    pub is_requester: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Exercise slug
    pub id: String,

    pub instructions_url: String,

    pub track: TrackSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Track slug
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationSummary {
    pub submitted_at: DateTime<Utc>,
}

/// Renders one solution for one requester
pub struct SolutionResponder<'a> {
    snapshot: &'a SolutionSnapshot,
    requester: &'a Requester,
    routes: &'a dyn SolutionRoutes,
}

impl<'a> SolutionResponder<'a> {
    pub fn new(
        snapshot: &'a SolutionSnapshot,
        requester: &'a Requester,
        routes: &'a dyn SolutionRoutes,
    ) -> Self {
        Self {
            snapshot,
            requester,
            routes,
        }
    }

    /// Builds the presentation record
    ///
    /// `now` decides whether the solution counts as published.
    ///
    /// # Errors
    ///
    /// [`ResponderError::MembershipNotFound`] if the owner has not joined the
    /// exercise's track.
    pub fn render(&self, now: DateTime<Utc>) -> Result<PresentationRecord, ResponderError> {
        let solution = &self.snapshot.solution;

        debug!(
            solution_id = %solution.id,
            requester_id = %self.requester.user_id,
            "Rendering solution"
        );

        Ok(PresentationRecord {
            id: solution.id,
            url: self.solution_url(now),
            owner: OwnerSummary {
                handle: self.owner_handle()?.to_string(),
                is_requester: self.is_requester(),
            },
            exercise: ExerciseSummary {
                id: self.snapshot.exercise.slug.clone(),
                instructions_url: self.instructions_url(),
                track: TrackSummary {
                    id: self.snapshot.track.slug.clone(),
                },
            },
            files: Vec::new(),
            iteration: self.iteration_summary(),
        })
    }

    /// Whether the requester owns the solution
    pub fn is_requester(&self) -> bool {
        self.snapshot.solution.is_owned_by(self.requester.user_id)
    }

    /// Owner's handle on the exercise's track
    ///
    /// The membership alias when the owner is anonymous on the track,
    /// otherwise the global handle.
    pub fn owner_handle(&self) -> Result<&str, ResponderError> {
        let owner = &self.snapshot.owner;

        let membership = self.snapshot.membership.as_ref().ok_or_else(|| {
            warn!(
                user_id = %owner.id,
                track_id = %self.snapshot.track.id,
                "Solution owner has no membership on track"
            );
            ResponderError::MembershipNotFound {
                user_id: owner.id,
                track_id: self.snapshot.track.id,
            }
        })?;

        Ok(membership.alias().unwrap_or(owner.handle.as_str()))
    }

    /// URL of the solution as seen by the requester
    pub fn solution_url(&self, now: DateTime<Utc>) -> String {
        let solution = &self.snapshot.solution;

        if self.is_requester() {
            self.routes.my_solution_url(solution.id)
        } else if solution.is_published(now) {
            self.routes.track_exercise_solution_url(
                &self.snapshot.track.slug,
                &self.snapshot.exercise.slug,
                solution.id,
            )
        } else {
            self.routes.mentor_solution_url(solution.id)
        }
    }

    /// Always the owner-scoped URL
    pub fn instructions_url(&self) -> String {
        self.routes.my_solution_url(self.snapshot.solution.id)
    }

    pub fn iteration_summary(&self) -> Option<IterationSummary> {
        Iteration::latest(&self.snapshot.iterations).map(|iteration| IterationSummary {
            submitted_at: iteration.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        exercise::Exercise, solution::Solution, track::Track, user::User, user_track::UserTrack,
    };
    use crate::routes::SiteRoutes;
    use chrono::Duration;

    fn snapshot(published_at: Option<DateTime<Utc>>) -> SolutionSnapshot {
        let now = Utc::now();
        let owner = User {
            id: Uuid::new_v4(),
            handle: "iHiD".to_string(),
            created_at: now,
        };
        let track = Track {
            id: Uuid::new_v4(),
            slug: "ruby".to_string(),
            title: "Ruby".to_string(),
            created_at: now,
        };
        let exercise = Exercise {
            id: Uuid::new_v4(),
            track_id: track.id,
            slug: "hello-world".to_string(),
            created_at: now,
        };
        let solution = Solution {
            id: Uuid::new_v4(),
            user_id: owner.id,
            exercise_id: exercise.id,
            published_at,
            created_at: now,
        };
        let membership = UserTrack {
            user_id: owner.id,
            track_id: track.id,
            anonymous: false,
            handle: None,
            created_at: now,
        };

        SolutionSnapshot {
            solution,
            owner,
            exercise,
            track,
            membership: Some(membership),
            iterations: Vec::new(),
        }
    }

    fn owner_of(snapshot: &SolutionSnapshot) -> Requester {
        Requester::new(snapshot.owner.id)
    }

    fn stranger() -> Requester {
        Requester::new(Uuid::new_v4())
    }

    #[test]
    fn test_render_for_owner() {
        let snapshot = snapshot(None);
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let record = SolutionResponder::new(&snapshot, &requester, &routes)
            .render(Utc::now())
            .unwrap();

        let my_url = format!("https://exercism.io/my/solutions/{}", snapshot.solution.id);
        assert_eq!(
            record,
            PresentationRecord {
                id: snapshot.solution.id,
                url: my_url.clone(),
                owner: OwnerSummary {
                    handle: "iHiD".to_string(),
                    is_requester: true,
                },
                exercise: ExerciseSummary {
                    id: "hello-world".to_string(),
                    instructions_url: my_url,
                    track: TrackSummary {
                        id: "ruby".to_string(),
                    },
                },
                files: vec![],
                iteration: None,
            }
        );
    }

    #[test]
    fn test_render_json_shape() {
        let snapshot = snapshot(None);
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let record = SolutionResponder::new(&snapshot, &requester, &routes)
            .render(Utc::now())
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["files"], serde_json::json!([]));
        assert!(json["iteration"].is_null());
        assert_eq!(json["exercise"]["track"]["id"], "ruby");
        assert_eq!(json["owner"]["is_requester"], true);
    }

    #[test]
    fn test_different_requester_is_not_owner() {
        let snapshot = snapshot(None);
        let requester = stranger();
        let routes = SiteRoutes::default();

        let record = SolutionResponder::new(&snapshot, &requester, &routes)
            .render(Utc::now())
            .unwrap();
        assert!(!record.owner.is_requester);
    }

    #[test]
    fn test_handle_is_alias_on_anonymous_track() {
        let mut snapshot = snapshot(None);
        if let Some(membership) = snapshot.membership.as_mut() {
            membership.anonymous = true;
            membership.handle = Some("foosa1111".to_string());
        }
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert_eq!(responder.owner_handle().unwrap(), "foosa1111");
    }

    #[test]
    fn test_handle_ignores_alias_when_not_anonymous() {
        let mut snapshot = snapshot(None);
        if let Some(membership) = snapshot.membership.as_mut() {
            membership.handle = Some("foosa1111".to_string());
        }
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert_eq!(responder.owner_handle().unwrap(), "iHiD");
    }

    #[test]
    fn test_anonymous_without_alias_falls_back_to_handle() {
        let mut snapshot = snapshot(None);
        if let Some(membership) = snapshot.membership.as_mut() {
            membership.anonymous = true;
        }
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert_eq!(responder.owner_handle().unwrap(), "iHiD");
    }

    #[test]
    fn test_missing_membership_is_an_error() {
        let mut snapshot = snapshot(None);
        snapshot.membership = None;
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let err = SolutionResponder::new(&snapshot, &requester, &routes)
            .render(Utc::now())
            .unwrap_err();
        assert_eq!(
            err,
            ResponderError::MembershipNotFound {
                user_id: snapshot.owner.id,
                track_id: snapshot.track.id,
            }
        );
    }

    #[test]
    fn test_iteration_is_latest_submission() {
        let mut snapshot = snapshot(None);
        let created_at = Utc::now() - Duration::weeks(1);
        snapshot.iterations = vec![
            Iteration {
                id: 1,
                solution_id: snapshot.solution.id,
                created_at: created_at - Duration::days(3),
            },
            Iteration {
                id: 2,
                solution_id: snapshot.solution.id,
                created_at,
            },
        ];
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let record = SolutionResponder::new(&snapshot, &requester, &routes)
            .render(Utc::now())
            .unwrap();
        let submitted_at = record.iteration.unwrap().submitted_at;
        assert_eq!(submitted_at.timestamp(), created_at.timestamp());
    }

    #[test]
    fn test_unpublished_solution_for_mentor_uses_mentor_url() {
        let snapshot = snapshot(None);
        let mentor = stranger();
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &mentor, &routes);
        assert_eq!(
            responder.solution_url(Utc::now()),
            format!("https://exercism.io/mentor/solutions/{}", snapshot.solution.id)
        );
    }

    #[test]
    fn test_published_solution_for_owner_uses_my_url() {
        let snapshot = snapshot(Some(Utc::now() - Duration::weeks(1)));
        let requester = owner_of(&snapshot);
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert_eq!(
            responder.solution_url(Utc::now()),
            format!("https://exercism.io/my/solutions/{}", snapshot.solution.id)
        );
    }

    #[test]
    fn test_published_solution_for_other_user_uses_public_url() {
        let snapshot = snapshot(Some(Utc::now() - Duration::weeks(1)));
        let requester = stranger();
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert_eq!(
            responder.solution_url(Utc::now()),
            format!(
                "https://exercism.io/tracks/ruby/exercises/hello-world/solutions/{}",
                snapshot.solution.id
            )
        );
    }

    #[test]
    fn test_scheduled_publication_counts_as_unpublished() {
        let snapshot = snapshot(Some(Utc::now() + Duration::days(1)));
        let requester = stranger();
        let routes = SiteRoutes::default();

        let responder = SolutionResponder::new(&snapshot, &requester, &routes);
        assert!(responder.solution_url(Utc::now()).contains("/mentor/solutions/"));
    }

    #[test]
    fn test_instructions_url_is_owner_scoped_for_everyone() {
        let snapshot = snapshot(Some(Utc::now() - Duration::weeks(1)));
        let routes = SiteRoutes::default();
        let my_url = format!("https://exercism.io/my/solutions/{}", snapshot.solution.id);

        for requester in [owner_of(&snapshot), stranger()] {
            let responder = SolutionResponder::new(&snapshot, &requester, &routes);
            assert_eq!(responder.instructions_url(), my_url);
        }
    }
}
