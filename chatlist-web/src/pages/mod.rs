mod chat;
mod error;

pub use chat::ChatPage;
pub use error::ErrorPage;
