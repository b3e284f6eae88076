/// Requester identity
///
/// Added to request extensions by the API's bearer-token middleware and
/// handed to responders that vary their output by viewer.
///
/// ```
/// use exercism_shared::auth::Requester;
/// use exercism_shared::auth::token::Claims;
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let requester = Requester::from_claims(&Claims::new(user_id));
/// assert_eq!(requester.user_id, user_id);
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::Claims;

/// The authenticated user making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub user_id: Uuid,
}

impl Requester {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// Creates a requester from validated token claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self::new(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims() {
        let user_id = Uuid::new_v4();
        assert_eq!(Requester::from_claims(&Claims::new(user_id)).user_id, user_id);
    }
}
