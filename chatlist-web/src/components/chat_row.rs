use std::rc::Rc;

use shared::config::{AvatarConfig, ChatListConfig};
use yew::{
    AttrValue, Callback, Html, MouseEvent, Properties, classes, function_component, html,
    use_node_ref,
};
use yew_router::Routable;

use crate::components::avatar_card::AvatarCard;
use crate::models::ChatRowViewModel;
use crate::motion::{EntranceMotion, use_entered_viewport};
use crate::routes::{MainRoute, chat_route};
use crate::style::{PRESENCE_DOT_STYLE, ROW_LAYOUT_STYLE, ROW_LINK_STYLE, RowPalette};

/// Presentation shared by every row of a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowTheme {
    pub palette: RowPalette,
    pub motion: EntranceMotion,
    pub avatars: AvatarConfig,
}

impl RowTheme {
    pub fn from_config(config: &ChatListConfig) -> Self {
        Self {
            palette: RowPalette::new(&config.palette),
            motion: EntranceMotion::from(&config.motion),
            avatars: config.avatars,
        }
    }
}

/// Emitted when a row receives the secondary gesture (right click).
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryAction<E = MouseEvent> {
    pub event: E,
    pub chat_id: AttrValue,
    pub is_group: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChatRowProps {
    pub row: ChatRowViewModel,
    #[prop_or_default]
    pub theme: Rc<RowTheme>,
    pub on_navigate: Callback<MainRoute>,
    pub on_secondary: Callback<SecondaryAction>,
    /// Derives the navigation target from the chat id; `/chat/:chat_id` when unset.
    #[prop_or_default]
    pub route_for: Option<Callback<AttrValue, MainRoute>>,
}

/// Forwards row gestures to the injected collaborators.
///
/// Built from the props of the current render, so handlers never see an id or
/// group flag from an earlier render.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowDispatch {
    chat_id: AttrValue,
    is_group: bool,
    route: MainRoute,
}

impl RowDispatch {
    pub(crate) fn new(
        row: &ChatRowViewModel,
        route_for: Option<&Callback<AttrValue, MainRoute>>,
    ) -> Self {
        let route = route_for.map_or_else(
            || chat_route(&row.id),
            |derive| derive.emit(row.id.clone()),
        );
        Self {
            chat_id: row.id.clone(),
            is_group: row.is_group,
            route,
        }
    }

    pub(crate) fn route(&self) -> &MainRoute {
        &self.route
    }

    pub(crate) fn activate(&self, on_navigate: &Callback<MainRoute>) {
        tracing::debug!(chat_id = %self.chat_id, route = ?self.route, "chat row activated");
        on_navigate.emit(self.route.clone());
    }

    pub(crate) fn request_context<E>(&self, event: E, on_secondary: &Callback<SecondaryAction<E>>) {
        tracing::debug!(chat_id = %self.chat_id, is_group = self.is_group, "chat row context requested");
        on_secondary.emit(SecondaryAction {
            event,
            chat_id: self.chat_id.clone(),
            is_group: self.is_group,
        });
    }
}

/// Clicks the browser should handle itself (new tab, new window, middle click).
fn is_modified_click(event: &MouseEvent) -> bool {
    event.button() != 0 || event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key()
}

#[function_component(ChatRow)]
pub fn chat_row(props: &ChatRowProps) -> Html {
    let row = &props.row;
    let theme = &props.theme;
    let dispatch = Rc::new(RowDispatch::new(row, props.route_for.as_ref()));
    let href = dispatch.route().to_path();
    let anchor = use_node_ref();
    let entered = use_entered_viewport(anchor.clone());

    let onclick = {
        let dispatch = dispatch.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if is_modified_click(&event) {
                return;
            }
            event.prevent_default();
            dispatch.activate(&on_navigate);
        })
    };

    let oncontextmenu = {
        let on_secondary = props.on_secondary.clone();
        Callback::from(move |event: MouseEvent| {
            dispatch.request_context(event, &on_secondary);
        })
    };

    let body_style = format!(
        "{ROW_LAYOUT_STYLE} {} {}",
        theme.palette.select(row.is_highlighted),
        theme.motion.style_for(row.render_index, entered)
    );
    let body_class = classes!(
        "chat-row-body",
        row.is_highlighted.then_some("chat-row-highlighted")
    );

    html! {
        <a
            ref={anchor}
            class="chat-row"
            href={href}
            style={ROW_LINK_STYLE}
            data-chat-id={row.id.clone()}
            {onclick}
            {oncontextmenu}
        >
            <div class={body_class} style={body_style}>
                <AvatarCard avatars={row.avatar_urls.clone()} config={theme.avatars} />
                <div class="flex flex-col">
                    <span class="chat-row-name font-bold">{ row.display_name.clone() }</span>
                    {
                        if let Some(label) = row.unread_label() {
                            html! { <span class="chat-row-unread text-sm opacity-70">{ label }</span> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
                {
                    if row.is_online {
                        html! {
                            <span class="chat-row-presence" style={PRESENCE_DOT_STYLE} aria-label="online"></span>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        </a>
    }
}
