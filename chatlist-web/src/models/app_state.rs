use shared::models::{ChatSummary, NewMessageAlert, NewMessageEvent};
use std::collections::HashSet;
use yewdux::Store;

use crate::components::chat_context_menu::ContextTarget;
use crate::realtime::RealtimeEvent;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Id of the signed-in user, used to ignore ourselves in presence checks.
    pub self_id: Option<String>,
    pub chats: Vec<ChatSummary>,
    /// Chat currently shown in the conversation pane.
    pub opened_chat: Option<String>,
    pub online_users: HashSet<String>,
    pub new_message_alerts: Vec<NewMessageAlert>,
    pub context_target: Option<ContextTarget>,
    pub error: Option<String>,
    /// Set once the first chat list response (or failure) has arrived.
    pub loaded: bool,
}

impl AppState {
    /// Replaces the chat list, dropping entries the list cannot address and
    /// alerts for chats that are no longer listed.
    pub fn replace_chats(&mut self, chats: Vec<ChatSummary>) {
        self.loaded = true;
        self.chats = chats
            .into_iter()
            .filter(|chat| match chat.validate() {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(name = %chat.name, %err, "dropping chat");
                    false
                }
            })
            .collect();
        let chats = &self.chats;
        self.new_message_alerts
            .retain(|alert| chats.iter().any(|chat| chat.id == alert.chat_id));
    }

    /// Forgets a chat along with its pending alert and any open menu on it.
    pub fn remove_chat(&mut self, chat_id: &str) {
        self.chats.retain(|chat| chat.id != chat_id);
        self.clear_alert(chat_id);
        if self
            .context_target
            .as_ref()
            .is_some_and(|target| target.chat_id.as_str() == chat_id)
        {
            self.context_target = None;
        }
    }

    /// Counts one more incoming message for a chat.
    pub fn bump_alert(&mut self, chat_id: &str) {
        if let Some(alert) = self
            .new_message_alerts
            .iter_mut()
            .find(|alert| alert.chat_id == chat_id)
        {
            alert.count = alert.count.saturating_add(1);
        } else {
            self.new_message_alerts
                .push(NewMessageAlert::new(chat_id, 1));
        }
    }

    pub fn clear_alert(&mut self, chat_id: &str) {
        self.new_message_alerts
            .retain(|alert| alert.chat_id != chat_id);
    }

    /// Marks a chat as the one on screen and clears its pending alert.
    pub fn open_chat(&mut self, chat_id: Option<&str>) {
        self.opened_chat = chat_id.map(ToString::to_string);
        if let Some(chat_id) = chat_id {
            self.clear_alert(chat_id);
        }
    }

    /// Folds a pushed event into the state. Returns `true` when the chat list
    /// itself is stale and has to be fetched again.
    pub fn apply_realtime(&mut self, event: RealtimeEvent) -> bool {
        match event {
            RealtimeEvent::OnlineUsers(users) => {
                self.set_online_users(users);
                false
            }
            RealtimeEvent::NewMessage(NewMessageEvent { chat_id }) => {
                if self.opened_chat.as_deref() != Some(chat_id.as_str()) {
                    self.bump_alert(&chat_id);
                }
                false
            }
            RealtimeEvent::RefetchChats => true,
        }
    }

    pub fn set_online_users<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.online_users = users.into_iter().collect();
    }
}
