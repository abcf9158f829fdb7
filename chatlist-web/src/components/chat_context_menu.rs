use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};

use crate::components::chat_row::SecondaryAction;

/// A chat the user right-clicked, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextTarget {
    pub chat_id: AttrValue,
    pub is_group: bool,
    pub x: i32,
    pub y: i32,
}

impl ContextTarget {
    /// What confirming the menu does to this chat.
    pub const fn action_label(&self) -> &'static str {
        if self.is_group {
            "Leave Group"
        } else {
            "Delete Chat"
        }
    }

    const fn action_icon(&self) -> IconId {
        if self.is_group {
            IconId::HeroiconsOutlineArrowRightOnRectangle
        } else {
            IconId::HeroiconsOutlineTrash
        }
    }
}

impl From<&SecondaryAction> for ContextTarget {
    fn from(action: &SecondaryAction) -> Self {
        Self {
            chat_id: action.chat_id.clone(),
            is_group: action.is_group,
            x: action.event.client_x(),
            y: action.event.client_y(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatContextMenuProps {
    #[prop_or_default]
    pub target: Option<ContextTarget>,
    pub on_confirm: Callback<ContextTarget>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ChatContextMenu)]
pub fn chat_context_menu(props: &ChatContextMenuProps) -> Html {
    let Some(target) = props.target.clone() else {
        return Html::default();
    };

    let menu_style = format!(
        "position: fixed; left: {}px; top: {}px; z-index: 50;",
        target.x, target.y
    );
    let label = target.action_label();
    let icon = target.action_icon();

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        let target = target.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(target.clone()))
    };
    let on_backdrop = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_dismiss.emit(());
        })
    };

    html! {
        <>
            <div class="fixed inset-0 z-40" onclick={on_backdrop.clone()} oncontextmenu={on_backdrop}></div>
            <ul class="chat-context-menu menu bg-base-200 rounded-box shadow-lg w-48" style={menu_style}>
                <li>
                    <button type="button" class="flex items-center gap-2" onclick={on_confirm}>
                        <Icon icon_id={icon} class="w-4 h-4" />
                        <span>{ label }</span>
                    </button>
                </li>
            </ul>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn target(is_group: bool) -> ContextTarget {
        ContextTarget {
            chat_id: "c1".into(),
            is_group,
            x: 120,
            y: 48,
        }
    }

    #[test]
    fn test_action_label_by_chat_kind() {
        assert_eq!(target(false).action_label(), "Delete Chat");
        assert_eq!(target(true).action_label(), "Leave Group");
    }

    async fn render(target: Option<(bool, i32, i32)>) -> String {
        ServerRenderer::<ChatContextMenu>::with_props(move || ChatContextMenuProps {
            target: target.map(|(is_group, x, y)| ContextTarget {
                chat_id: "c1".into(),
                is_group,
                x,
                y,
            }),
            on_confirm: Callback::noop(),
            on_dismiss: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_hidden_without_target() {
        let html = render(None).await;
        assert!(!html.contains("chat-context-menu"));
    }

    #[tokio::test]
    async fn test_positions_menu_at_pointer() {
        let html = render(Some((false, 120, 48))).await;
        assert!(html.contains("left: 120px; top: 48px;"));
        assert!(html.contains("Delete Chat"));
    }

    #[tokio::test]
    async fn test_group_menu_offers_leave() {
        let html = render(Some((true, 0, 0))).await;
        assert!(html.contains("Leave Group"));
        assert!(!html.contains("Delete Chat"));
    }
}
