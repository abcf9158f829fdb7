//! Server-sent events from the chat service: presence, message alerts and
//! chat list invalidation.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::from_str;
use shared::models::{NewMessageEvent, OnlineUsersEvent};
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventSource, MessageEvent};
use yew::{hook, use_effect_with};
use yewdux::{Dispatch, functional::use_dispatch};

use crate::api::ChatClient;
use crate::models::app_state::AppState;

pub const ONLINE_USERS: &str = "online_users";
pub const NEW_MESSAGE_ALERT: &str = "new_message_alert";
pub const REFETCH_CHATS: &str = "refetch_chats";

/// A decoded event from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealtimeEvent {
    OnlineUsers(Vec<String>),
    NewMessage(NewMessageEvent),
    RefetchChats,
}

/// Decodes a named stream event. Unknown names and malformed payloads yield `None`.
pub(crate) fn parse_event(name: &str, data: &str) -> Option<RealtimeEvent> {
    match name {
        ONLINE_USERS => match from_str::<OnlineUsersEvent>(data) {
            Ok(event) => Some(RealtimeEvent::OnlineUsers(event.users)),
            // Older servers push a bare array of ids.
            Err(_) => from_str::<Vec<String>>(data)
                .map(RealtimeEvent::OnlineUsers)
                .map_err(|err| tracing::warn!(%err, "malformed online_users event"))
                .ok(),
        },
        NEW_MESSAGE_ALERT => from_str::<NewMessageEvent>(data)
            .map(RealtimeEvent::NewMessage)
            .map_err(|err| tracing::warn!(%err, "malformed new_message_alert event"))
            .ok(),
        REFETCH_CHATS => Some(RealtimeEvent::RefetchChats),
        _ => None,
    }
}

/// Fetches the chat list and stores it, recording any failure in state.
pub(crate) async fn refresh_chats(dispatch: Dispatch<AppState>) {
    match ChatClient::shared().my_chats().await {
        Ok(response) => {
            dispatch.reduce_mut(move |state| {
                state.replace_chats(response.chats);
                state.error = None;
            });
        }
        Err(err) => {
            tracing::warn!(%err, "failed to load chats");
            let message = format!("Failed to load chats: {err}");
            dispatch.reduce_mut(move |state| {
                state.loaded = true;
                state.error = Some(message);
            });
        }
    }
}

type ListenerRegistry = Rc<RefCell<Vec<Closure<dyn FnMut(MessageEvent)>>>>;

fn register_listeners(
    event_source: &EventSource,
    listeners: &ListenerRegistry,
    dispatch: &Dispatch<AppState>,
) {
    for name in [ONLINE_USERS, NEW_MESSAGE_ALERT, REFETCH_CHATS] {
        let dispatch = dispatch.clone();
        let listener =
            Closure::<dyn FnMut(MessageEvent)>::wrap(Box::new(move |event: MessageEvent| {
                let data = event.data().as_string().unwrap_or_default();
                let Some(parsed) = parse_event(name, &data) else {
                    return;
                };
                let mut state = (*dispatch.get()).clone();
                let refetch = state.apply_realtime(parsed);
                dispatch.set(state);
                if refetch {
                    spawn_local(refresh_chats(dispatch.clone()));
                }
            }));
        if let Err(err) =
            event_source.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
        {
            tracing::warn!(name, ?err, "failed to register stream listener");
            continue;
        }
        listeners.borrow_mut().push(listener);
    }
}

/// Subscribes to the event stream at `url` for as long as the caller is mounted.
#[hook]
pub fn use_realtime_events(url: Option<String>) {
    let dispatch = use_dispatch::<AppState>();

    use_effect_with(url, move |url| {
        let mut cleanup: Option<(EventSource, ListenerRegistry)> = None;

        if let Some(url) = url {
            match EventSource::new(url) {
                Ok(event_source) => {
                    let listeners: ListenerRegistry = Rc::new(RefCell::new(Vec::new()));
                    register_listeners(&event_source, &listeners, &dispatch);
                    cleanup = Some((event_source, listeners));
                }
                Err(err) => tracing::warn!(%url, ?err, "failed to open event stream"),
            }
        }

        move || {
            if let Some((event_source, listeners)) = cleanup {
                event_source.close();
                listeners.borrow_mut().clear();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_online_users_object() {
        assert_eq!(
            parse_event(ONLINE_USERS, r#"{"users":["u1","u2"]}"#),
            Some(RealtimeEvent::OnlineUsers(vec!["u1".into(), "u2".into()]))
        );
    }

    #[test]
    fn test_parse_online_users_bare_array() {
        assert_eq!(
            parse_event(ONLINE_USERS, r#"["u3"]"#),
            Some(RealtimeEvent::OnlineUsers(vec!["u3".into()]))
        );
    }

    #[test]
    fn test_parse_new_message_alert() {
        assert_eq!(
            parse_event(NEW_MESSAGE_ALERT, r#"{"chatId":"c1"}"#),
            Some(RealtimeEvent::NewMessage(NewMessageEvent {
                chat_id: "c1".into()
            }))
        );
    }

    #[test]
    fn test_parse_refetch_ignores_payload() {
        assert_eq!(
            parse_event(REFETCH_CHATS, ""),
            Some(RealtimeEvent::RefetchChats)
        );
    }

    #[test]
    fn test_malformed_and_unknown_events_are_dropped() {
        assert_eq!(parse_event(NEW_MESSAGE_ALERT, "not json"), None);
        assert_eq!(parse_event(ONLINE_USERS, "{\"users\": 4}"), None);
        assert_eq!(parse_event("typing", "{}"), None);
    }
}
