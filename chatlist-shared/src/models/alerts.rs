use serde::{Deserialize, Serialize};

use super::ChatModelError;

/// Pending message counter for one chat, as pushed by the realtime service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageAlert {
    pub chat_id: String,
    pub count: i64,
}

impl NewMessageAlert {
    #[must_use]
    pub fn new(chat_id: impl Into<String>, count: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            count,
        }
    }

    /// Converts the wire counter into a validated [`UnreadSummary`].
    ///
    /// # Errors
    /// Returns [`ChatModelError::NegativeUnreadCount`] when `count < 0`.
    pub fn summary(&self) -> Result<UnreadSummary, ChatModelError> {
        UnreadSummary::try_from_count(self.count).map_err(|_| {
            ChatModelError::NegativeUnreadCount {
                chat_id: self.chat_id.clone(),
                count: self.count,
            }
        })
    }
}

/// Payload of the realtime `new_message_alert` event: one message arrived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageEvent {
    pub chat_id: String,
}

/// Unread counter attached to a rendered chat row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct UnreadSummary {
    pub count: u32,
}

impl UnreadSummary {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Builds a summary from a signed counter, saturating above `u32::MAX`.
    ///
    /// # Errors
    /// Returns [`ChatModelError::NegativeUnreadCount`] (with an empty chat id)
    /// for negative input; callers that know the chat should use
    /// [`NewMessageAlert::summary`].
    pub fn try_from_count(count: i64) -> Result<Self, ChatModelError> {
        if count < 0 {
            return Err(ChatModelError::NegativeUnreadCount {
                chat_id: String::new(),
                count,
            });
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Ok(Self { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_wire_format() {
        let alert: NewMessageAlert =
            serde_json::from_str(r#"{"chatId":"c1","count":3}"#).unwrap();
        assert_eq!(alert, NewMessageAlert::new("c1", 3));
    }

    #[test]
    fn test_new_message_event_wire_format() {
        let event: NewMessageEvent = serde_json::from_str(r#"{"chatId":"c4"}"#).unwrap();
        assert_eq!(event.chat_id, "c4");
    }

    #[test]
    fn test_alert_summary_accepts_zero() {
        let summary = NewMessageAlert::new("c1", 0).summary().unwrap();
        assert_eq!(summary, UnreadSummary::new(0));
    }

    #[test]
    fn test_alert_summary_rejects_negative_with_chat_id() {
        let error = NewMessageAlert::new("c7", -1).summary().unwrap_err();
        assert_eq!(
            error,
            ChatModelError::NegativeUnreadCount {
                chat_id: "c7".to_string(),
                count: -1,
            }
        );
    }

    #[test]
    fn test_unread_summary_saturates() {
        let summary = UnreadSummary::try_from_count(i64::MAX).unwrap();
        assert_eq!(summary.count, u32::MAX);
    }
}
