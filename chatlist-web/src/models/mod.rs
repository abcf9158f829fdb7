pub(crate) mod app_state;
pub(crate) mod chat_row;

pub use chat_row::ChatRowViewModel;
