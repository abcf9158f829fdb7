use thiserror::Error;

/// Reasons a chat payload cannot be turned into something the list can render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatModelError {
    /// The chat carries no usable identifier.
    #[error("chat id must not be empty")]
    EmptyChatId,
    /// An unread counter arrived below zero.
    #[error("unread count for chat `{chat_id}` is negative ({count})")]
    NegativeUnreadCount {
        /// The chat the counter belongs to.
        chat_id: String,
        /// The offending value as received.
        count: i64,
    },
}
