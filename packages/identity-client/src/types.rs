//! Response types returned by the identity service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal public view of a user, as embedded in content trees.
///
/// Unknown fields in the service response are ignored, so this decodes
/// from both the summary and the full-profile payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
}

/// Full profile of the authenticated user, returned by the
/// current-user lookup only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
}
