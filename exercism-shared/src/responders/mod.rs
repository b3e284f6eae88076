/// JSON responders
///
/// Responders are pure functions from loaded data to serializable records.
/// They perform no I/O.
///
/// - [`solution`]: solution record with requester-dependent URL

pub mod solution;
