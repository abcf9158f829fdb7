//! # Configuration
//!
//! Presentation settings for the chat list: colour table, entrance motion and
//! avatar stacking. Shared so that native tooling and the web client agree on
//! the same defaults.

pub mod chat_list;

pub use chat_list::{
    AvatarConfig, ChatListConfig, ColorPair, ConfigError, MotionConfig, MotionKind, PaletteTable,
};
