pub(crate) mod avatar_card;
pub(crate) mod chat_context_menu;
pub(crate) mod chat_list;
pub(crate) mod chat_row;
pub(crate) mod loading;

// Re-export components for convenience
pub use chat_context_menu::{ChatContextMenu, ContextTarget};
pub use chat_list::ChatList;
pub use chat_row::{RowTheme, SecondaryAction};
