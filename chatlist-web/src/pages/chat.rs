use crate::api::ChatClient;
use crate::components::loading::Loading;
use crate::components::{ChatContextMenu, ChatList, ContextTarget, RowTheme, SecondaryAction};
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use yew::{
    AttrValue, Callback, Html, Properties, function_component, html, use_callback,
    use_effect_with, use_memo,
};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq, Eq)]
pub struct ChatPageProps {
    #[prop_or(None)]
    pub chat_id: Option<AttrValue>,
}

#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let theme = use_memo((), |_| {
        RowTheme::from_config(&FrontendConfig::new().chat_list)
    });

    // Opening a chat clears its pending alert.
    {
        let dispatch = dispatch.clone();
        use_effect_with(props.chat_id.clone(), move |chat_id| {
            let chat_id = chat_id.clone();
            dispatch.reduce_mut(move |state| state.open_chat(chat_id.as_deref()));
            || ()
        });
    }

    let on_secondary = {
        let dispatch = dispatch.clone();
        use_callback((), move |action: SecondaryAction, _| {
            action.event.prevent_default();
            let target = ContextTarget::from(&action);
            dispatch.reduce_mut(move |state| state.context_target = Some(target));
        })
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|state| state.context_target = None);
        })
    };

    let on_confirm = {
        let dispatch = dispatch.clone();
        Callback::from(move |target: ContextTarget| {
            dispatch.reduce_mut(|state| state.context_target = None);
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ChatClient::shared();
                let result = if target.is_group {
                    client.leave_group(&target.chat_id).await
                } else {
                    client.delete_chat(&target.chat_id).await
                };

                match result {
                    Ok(()) => {
                        let was_open = dispatch.get().opened_chat.as_deref()
                            == Some(target.chat_id.as_str());
                        dispatch.reduce_mut(move |state| state.remove_chat(&target.chat_id));
                        if was_open && let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(chat_id = %target.chat_id, %err, "chat action failed");
                        let message = format!("Failed to {}: {err}", target.action_label().to_lowercase());
                        dispatch.reduce_mut(move |state| state.error = Some(message));
                    }
                }
            });
        })
    };

    let opened_name = props.chat_id.as_ref().and_then(|id| {
        state
            .chats
            .iter()
            .find(|chat| chat.id == id.as_str())
            .map(|chat| chat.name.clone())
    });

    let sidebar = if state.loaded {
        html! {
            <ChatList
                chats={state.chats.clone()}
                selected={props.chat_id.clone()}
                online_users={state.online_users.clone()}
                new_message_alerts={state.new_message_alerts.clone()}
                self_id={state.self_id.clone().map(AttrValue::from)}
                theme={theme.clone()}
                on_secondary={on_secondary.clone()}
            />
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="flex gap-4 h-full">
            <aside class="w-80 shrink-0 space-y-2">
                {
                    if let Some(error) = state.error.clone() {
                        html! { <div class="alert alert-error text-sm">{ error }</div> }
                    } else {
                        Html::default()
                    }
                }
                { sidebar }
            </aside>
            <section class="flex-1 flex items-center justify-center text-base-content/70">
                {
                    match (props.chat_id.as_ref(), opened_name) {
                        (Some(_), Some(name)) => html! {
                            <h2 class="text-xl font-semibold text-base-content">{ name }</h2>
                        },
                        (Some(_), None) if state.loaded => html! {
                            <p>{ "This chat is no longer available." }</p>
                        },
                        (Some(_), None) => Html::default(),
                        (None, _) => html! { <p>{ "Select a chat to start messaging." }</p> },
                    }
                }
            </section>
            <ChatContextMenu
                target={state.context_target.clone()}
                {on_confirm}
                {on_dismiss}
            />
        </div>
    }
}
