use serde::{Deserialize, Serialize};

use super::UserId;

/// An entry in the friends list surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub id: UserId,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub handle: String,
    /// Number of friends in common with the current user
    #[serde(default)]
    pub mutual_friends: u32,
}
