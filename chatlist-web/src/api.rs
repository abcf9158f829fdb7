use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, RequestBuilder};
use shared::models::{MyChatsResponse, UserProfile};

thread_local! {
    static SHARED_CLIENT: OnceCell<ChatClient> = OnceCell::new();
}

/// Lightweight API client for the chat service.
#[derive(Clone, Debug)]
pub struct ChatClient {
    base_url: String,
    client: Client,
}

/// Joins a possibly relative base URL onto the page origin.
pub(crate) fn resolve_base_url(base_url: &str, origin: Option<&str>) -> String {
    let base_url = base_url.trim_end_matches('/');
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        return base_url.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            base_url.trim_start_matches('/')
        ),
        None => base_url.to_string(),
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

impl ChatClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client bound to the configured API base, shared per thread.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = crate::config::FrontendConfig::new();
                let base = resolve_base_url(config.api_base_url(), page_origin().as_deref());
                Self::new(&base)
            })
            .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_credentials(request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Chats visible to the signed-in user.
    pub async fn my_chats(&self) -> Result<MyChatsResponse, Error> {
        let url = self.api_url("chat/my");
        tracing::debug!(%url, "fetching chats");
        Self::with_credentials(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Profile of the signed-in user.
    pub async fn me(&self) -> Result<UserProfile, Error> {
        let url = self.api_url("user/me");
        Self::with_credentials(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Delete a direct chat.
    pub async fn delete_chat(&self, chat_id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("chat/{chat_id}"));
        tracing::debug!(%url, "deleting chat");
        Self::with_credentials(self.client.delete(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Leave a group chat.
    pub async fn leave_group(&self, chat_id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("chat/leave/{chat_id}"));
        tracing::debug!(%url, "leaving group");
        Self::with_credentials(self.client.delete(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// URL of the server-sent event stream carrying presence and alerts.
    pub fn events_url(&self) -> String {
        self.api_url("events")
    }
}
