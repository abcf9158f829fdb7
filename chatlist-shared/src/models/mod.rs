pub mod alerts;
pub mod chat;
pub mod errors;
pub mod user;

pub use alerts::{NewMessageAlert, NewMessageEvent, UnreadSummary};
pub use chat::{ChatSummary, MyChatsResponse};
pub use errors::ChatModelError;
pub use user::{OnlineUsersEvent, UserProfile};
