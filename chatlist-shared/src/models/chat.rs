use serde::{Deserialize, Serialize};

use super::ChatModelError;

/// A chat as listed by the chat service for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    /// Stable identifier of the chat.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name: the group title, or the other participant's name.
    pub name: String,
    /// Avatar image URLs, most relevant first.
    #[serde(default)]
    pub avatar: Vec<String>,
    /// Whether this is a group chat rather than a direct conversation.
    #[serde(default)]
    pub group_chat: bool,
    /// Member user ids.
    #[serde(default)]
    pub members: Vec<String>,
}

impl ChatSummary {
    /// Checks the summary can be addressed by the list and the router.
    ///
    /// # Errors
    /// Returns [`ChatModelError::EmptyChatId`] when the id is blank.
    pub fn validate(&self) -> Result<(), ChatModelError> {
        if self.id.trim().is_empty() {
            return Err(ChatModelError::EmptyChatId);
        }
        Ok(())
    }

    /// Returns `true` when any member other than `self_id` is in `online`.
    #[must_use]
    pub fn has_online_member<'a, I>(&self, self_id: Option<&str>, online: I) -> bool
    where
        I: IntoIterator<Item = &'a String> + Clone,
    {
        self.members
            .iter()
            .filter(|member| Some(member.as_str()) != self_id)
            .any(|member| online.clone().into_iter().any(|user| user == member))
    }
}

/// Response body for `GET /chat/my`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MyChatsResponse {
    /// Chats visible to the current user.
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
}
