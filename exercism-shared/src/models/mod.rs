/// Database models for Exercism
///
/// Each model owns its sqlx queries. Read paths used by the API go through
/// [`crate::store::Store`] rather than calling these directly.
///
/// # Models
///
/// - `user`: User accounts and global handles
/// - `track`: Language tracks
/// - `exercise`: Exercises on a track
/// - `user_track`: Per-track membership (anonymity and alias handle)
/// - `track_mentorship`: Mentor grants per track
/// - `solution`: A user's solution to an exercise
/// - `iteration`: Submitted revisions of a solution
/// - `blog_post`: Blog posts with scheduled publication

pub mod blog_post;
pub mod exercise;
pub mod iteration;
pub mod solution;
pub mod track;
pub mod track_mentorship;
pub mod user;
pub mod user_track;
