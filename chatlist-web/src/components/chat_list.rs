use std::collections::HashSet;
use std::rc::Rc;

use shared::models::{ChatSummary, NewMessageAlert};
use yew::{
    AttrValue, Callback, Html, Properties, function_component, html, use_callback, use_memo,
};
use yew_router::prelude::use_navigator;

use crate::components::chat_row::{ChatRow, RowTheme, SecondaryAction};
use crate::models::ChatRowViewModel;
use crate::routes::MainRoute;

/// Derives one view model per chat, in list order.
pub(crate) fn build_rows(
    chats: &[ChatSummary],
    selected: Option<&str>,
    online_users: &HashSet<String>,
    alerts: &[NewMessageAlert],
    self_id: Option<&str>,
) -> Vec<ChatRowViewModel> {
    chats
        .iter()
        .enumerate()
        .map(|(render_index, chat)| {
            let unread = alerts
                .iter()
                .find(|alert| alert.chat_id == chat.id)
                .and_then(|alert| match alert.summary() {
                    Ok(summary) => Some(summary),
                    Err(err) => {
                        tracing::warn!(%err, "ignoring unread alert");
                        None
                    }
                });

            ChatRowViewModel {
                id: AttrValue::from(chat.id.clone()),
                display_name: AttrValue::from(chat.name.clone()),
                avatar_urls: chat.avatar.iter().cloned().map(AttrValue::from).collect(),
                is_group: chat.group_chat,
                is_highlighted: selected == Some(chat.id.as_str()),
                is_online: chat.has_online_member(self_id, online_users),
                unread,
                render_index,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ChatListProps {
    pub chats: Vec<ChatSummary>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    #[prop_or_default]
    pub online_users: HashSet<String>,
    #[prop_or_default]
    pub new_message_alerts: Vec<NewMessageAlert>,
    #[prop_or_default]
    pub self_id: Option<AttrValue>,
    #[prop_or_default]
    pub theme: Rc<RowTheme>,
    pub on_secondary: Callback<SecondaryAction>,
}

#[function_component(ChatList)]
pub fn chat_list(props: &ChatListProps) -> Html {
    let navigator = use_navigator();
    let on_navigate = use_callback(navigator, |route: MainRoute, navigator| {
        match navigator {
            Some(navigator) => navigator.push(&route),
            None => tracing::warn!(?route, "chat row activated outside a router"),
        }
    });

    let rows = use_memo(
        (
            props.chats.clone(),
            props.selected.clone(),
            props.online_users.clone(),
            props.new_message_alerts.clone(),
            props.self_id.clone(),
        ),
        |(chats, selected, online_users, alerts, self_id)| {
            build_rows(
                chats,
                selected.as_deref(),
                online_users,
                alerts,
                self_id.as_deref(),
            )
        },
    );

    if rows.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">
                {"No chats yet. Start a conversation to see it here."}
            </div>
        };
    }

    html! {
        <nav class="chat-list flex flex-col gap-2">
            <style>{ props.theme.motion.keyframes() }</style>
            { for rows.iter().map(|row| html! {
                <ChatRow
                    key={row.id.to_string()}
                    row={row.clone()}
                    theme={props.theme.clone()}
                    on_navigate={on_navigate.clone()}
                    on_secondary={props.on_secondary.clone()}
                />
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UnreadSummary;
    use yew::ServerRenderer;

    fn chat(id: &str, name: &str, group_chat: bool, members: &[&str]) -> ChatSummary {
        ChatSummary {
            id: id.to_string(),
            name: name.to_string(),
            avatar: vec![format!("https://cdn.example/{id}.png")],
            group_chat,
            members: members.iter().map(ToString::to_string).collect(),
        }
    }

    fn sample_chats() -> Vec<ChatSummary> {
        vec![
            chat("c1", "Alice", false, &["me", "alice"]),
            chat("c2", "Team", true, &["me", "bob", "carol"]),
        ]
    }

    #[test]
    fn test_rows_follow_list_order() {
        let rows = build_rows(&sample_chats(), None, &HashSet::new(), &[], Some("me"));
        let indices: Vec<_> = rows.iter().map(|row| row.render_index).collect();
        assert_eq!(indices, [0, 1]);
        assert_eq!(rows[0].display_name.as_str(), "Alice");
        assert!(rows[1].is_group);
        assert_eq!(rows[1].avatar_urls.len(), 1);
    }

    #[test]
    fn test_selected_chat_is_highlighted() {
        let rows = build_rows(&sample_chats(), Some("c2"), &HashSet::new(), &[], None);
        assert!(!rows[0].is_highlighted);
        assert!(rows[1].is_highlighted);
    }

    #[test]
    fn test_presence_from_other_members() {
        let online = HashSet::from(["me".to_string(), "carol".to_string()]);
        let rows = build_rows(&sample_chats(), None, &online, &[], Some("me"));
        assert!(!rows[0].is_online);
        assert!(rows[1].is_online);
    }

    #[test]
    fn test_alerts_attach_to_matching_chat() {
        let alerts = [NewMessageAlert::new("c2", 4)];
        let rows = build_rows(&sample_chats(), None, &HashSet::new(), &alerts, None);
        assert_eq!(rows[0].unread, None);
        assert_eq!(rows[1].unread, Some(UnreadSummary::new(4)));
    }

    #[test]
    fn test_negative_alert_is_dropped() {
        let alerts = [NewMessageAlert::new("c1", -3)];
        let rows = build_rows(&sample_chats(), None, &HashSet::new(), &alerts, None);
        assert_eq!(rows[0].unread, None);
    }

    #[test]
    fn test_rebuilding_unchanged_inputs_is_equal() {
        let alerts = [NewMessageAlert::new("c1", 1)];
        let online = HashSet::from(["alice".to_string()]);
        let first = build_rows(&sample_chats(), Some("c1"), &online, &alerts, Some("me"));
        let second = build_rows(&sample_chats(), Some("c1"), &online, &alerts, Some("me"));
        assert_eq!(first, second);
    }

    async fn render(chats: Vec<ChatSummary>, alerts: Vec<NewMessageAlert>) -> String {
        ServerRenderer::<ChatList>::with_props(move || ChatListProps {
            chats,
            selected: Some("c1".into()),
            online_users: HashSet::from(["alice".to_string()]),
            new_message_alerts: alerts,
            self_id: Some("me".into()),
            theme: Rc::default(),
            on_secondary: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_empty_list_message() {
        let html = render(Vec::new(), Vec::new()).await;
        assert!(html.contains("No chats yet"));
        assert!(!html.contains("chat-row"));
    }

    #[tokio::test]
    async fn test_renders_one_row_per_chat() {
        let html = render(sample_chats(), vec![NewMessageAlert::new("c2", 2)]).await;
        assert_eq!(html.matches(r#"class="chat-row""#).count(), 2);
        assert!(html.contains("@keyframes chat-row-slide-down"));
        assert!(html.contains("2 New Message"));
        assert_eq!(html.matches("chat-row-presence").count(), 1);
        assert_eq!(html.matches("chat-row-highlighted").count(), 1);
    }
}
