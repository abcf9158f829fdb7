use crate::api::ChatClient;
use crate::models::app_state::AppState;
use crate::realtime::{refresh_chats, use_realtime_events};
use crate::routes::{MainRoute, switch};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let events_url = use_state(|| None::<String>);

    {
        let store_dispatch = store_dispatch.clone();
        let events_url = events_url.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ChatClient::shared();
                match client.me().await {
                    Ok(profile) => {
                        store_dispatch.reduce_mut(move |state| state.self_id = Some(profile.id));
                    }
                    Err(err) => tracing::warn!(%err, "failed to load profile"),
                }
                refresh_chats(store_dispatch).await;
                events_url.set(Some(client.events_url()));
            });
            || ()
        });
    }

    use_realtime_events((*events_url).clone());

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
