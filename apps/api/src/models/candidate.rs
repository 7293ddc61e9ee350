use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidate identity for one interview attempt.
/// Created once when the profile step is submitted; immutable thereafter.
/// `id` and `created_at` are supplied by the caller, so transitions stay
/// replayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub name: String,
    /// Must name a role from the injected catalog.
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl CandidateProfile {
    pub fn new(name: String, role: String, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            role,
            created_at,
        }
    }
}
