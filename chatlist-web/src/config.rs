//! Frontend configuration module
//!
//! Compile-time settings for the web client: where the API lives and how the
//! chat list is presented.

use shared::config::ChatListConfig;

const EMBEDDED_CHAT_LIST_CONFIG: &str = include_str!("../config/chat_list.toml");

/// Frontend configuration for URLs and presentation
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the chat API, relative to the page origin unless absolute
    pub api_base_url: String,
    /// Chat list palette, motion and avatar settings
    pub chat_list: ChatListConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CHATLIST_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            chat_list: load_chat_list_config(EMBEDDED_CHAT_LIST_CONFIG),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// Parses the chat list settings, falling back to defaults on any error.
pub(crate) fn load_chat_list_config(content: &str) -> ChatListConfig {
    ChatListConfig::from_toml_str(content).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid chat list config, using defaults");
        ChatListConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::MotionKind;

    #[test]
    fn test_embedded_config_parses() {
        let parsed = ChatListConfig::from_toml_str(EMBEDDED_CHAT_LIST_CONFIG);
        assert!(parsed.is_ok(), "{parsed:?}");
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(
            load_chat_list_config(EMBEDDED_CHAT_LIST_CONFIG),
            ChatListConfig::default()
        );
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = load_chat_list_config("[avatars]\nmax_visible = 0");
        assert_eq!(config, ChatListConfig::default());
    }

    #[test]
    fn test_override_is_applied() {
        let config = load_chat_list_config("[motion]\nkind = \"none\"");
        assert_eq!(config.motion.kind, MotionKind::Still);
    }

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
