use serde::{Deserialize, Serialize};

/// The signed-in user, as returned by `GET /user/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Payload of the realtime `online_users` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OnlineUsersEvent {
    #[serde(default)]
    pub users: Vec<String>,
}
